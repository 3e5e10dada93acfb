mod settings;

pub use settings::{read_env_file, Settings, API_KEY, FROM_EMAIL, PASSWORD_RESET_URL};
