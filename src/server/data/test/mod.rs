mod client;
mod employee;
mod request;
