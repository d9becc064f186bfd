pub const DEFAULT_COUNT: u64 = 1000;
pub const DEFAULT_OUTPUT: &str = "commands2.txt";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;

// log a progress line every this many commands
pub const PROGRESS_INTERVAL: u64 = 100;
