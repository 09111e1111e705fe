mod cmdline;
mod scenarios;
mod utils;
