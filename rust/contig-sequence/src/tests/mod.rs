mod access_tests;
mod search_tests;
