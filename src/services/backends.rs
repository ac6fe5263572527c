pub mod juju_cli;
