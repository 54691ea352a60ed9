pub mod presenter_port;
