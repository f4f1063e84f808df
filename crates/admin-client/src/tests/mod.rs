mod client;
mod notice;
mod routing;
