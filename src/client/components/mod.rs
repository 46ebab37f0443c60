pub mod header;
pub mod image;
pub mod login;
pub mod manifest;
pub mod page;
pub mod search;

pub use header::Header;
pub use image::FallbackImage;
pub use login::LoginView;
pub use manifest::ManifestCard;
pub use page::Page;
pub use search::SearchView;
