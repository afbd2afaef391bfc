pub mod check;
pub mod extensions;

pub use check::{
    IGNORE_ENV_VAR, check_files, load_config, resolve_ignore, resolve_output_mode, run_check,
    write_html_report, write_output,
};
pub use extensions::{extensions_json, run_extensions};
