mod api;
mod application;
mod presentation;
mod test_error;
