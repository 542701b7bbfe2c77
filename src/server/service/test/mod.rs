mod client;
mod department;
mod employee;
mod finance;
mod request;
