mod api;
mod services;
mod views;
