mod capture;
mod integration;
