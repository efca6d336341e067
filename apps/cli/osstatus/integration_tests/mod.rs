// Integration tests for the standalone command: config → command → terminal streams

mod cli;
