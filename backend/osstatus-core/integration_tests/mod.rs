mod client;
mod command;
mod helpers;
