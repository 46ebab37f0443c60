//! Integration tests for the API client against a mockito backend.

mod api;
mod search;
