pub mod config;
pub mod logging;

pub mod items;
pub mod remover;
pub mod transport;
pub mod url_model;
pub mod xmlrpc;
