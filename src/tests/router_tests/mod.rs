mod auth_flow_tests;
mod favorites_tests;
mod home_tests;
mod properties_tests;
