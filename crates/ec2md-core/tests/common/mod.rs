pub mod imds_server;
