pub mod xmlrpc_server;
