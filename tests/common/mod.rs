use contactbook::RunResult;
use std::fs;
use std::path::{Path, PathBuf};

pub fn suite_dir(suite: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_files")
        .join(suite)
}

/// Runs a script, returning the result and the captured output/error streams
pub fn run(path: &Path) -> (RunResult, String, String) {
    let mut output_stream: Vec<u8> = Vec::new();
    let mut err_stream: Vec<u8> = Vec::new();

    let result = contactbook::run(path, &mut output_stream, &mut err_stream);

    let output = String::from_utf8(output_stream).unwrap();
    let errors = String::from_utf8(err_stream).unwrap();

    (result, output, errors)
}

/// Checks every script in `suite` against `expected/<stem>`
pub fn check_suite(suite: &str) {
    let _ = env_logger::builder().is_test(true).try_init();

    let base_dir = suite_dir(suite);
    let expected_dir = base_dir.join("expected");

    for entry in fs::read_dir(&base_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();

        // skip the `expected` subdirectory
        if path.is_dir() {
            continue;
        }

        println!("Running test: {}", path.display());

        let test_name = path.file_name().unwrap().to_string_lossy().to_string();
        let (_, output, errors) = run(&path);

        let expected_path = expected_dir.join(path.file_stem().unwrap());
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
            panic!(
                "Could not read expected output file for `{}`: {}",
                test_name, e
            )
        });

        let full_output = errors.trim_end().to_owned() + "\n" + &output;
        let normalized_output = full_output.trim().replace("\r\n", "\n");
        let normalized_expected = expected.trim().replace("\r\n", "\n");

        assert_eq!(
            normalized_output,
            normalized_expected,
            "Output mismatch for test `{}`",
            path.display(),
        );
    }
}
