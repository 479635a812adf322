use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run_command(args: &[&str], test_dir: &str) -> (bool, String, String) {
    // Use cargo run which will build if needed
    // Set LO_DIR in the environment for the subprocess
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .env("LO_DIR", test_dir)
        .env_remove("RUST_LOG")
        .current_dir(env::current_dir().unwrap())
        .output()
        .expect("Failed to execute command");

    let success = output.status.success();
    let stdout = String::from_utf8(output.stdout).unwrap_or_default();
    let stderr = String::from_utf8(output.stderr).unwrap_or_default();

    // Filter out cargo compilation messages from stderr
    let filtered_stderr: String = stderr
        .lines()
        .filter(|line| {
            !line.contains("Compiling")
                && !line.contains("Finished")
                && !line.contains("warning:")
                && !line.contains("note:")
        })
        .collect::<Vec<_>>()
        .join("\n");

    // Combine stdout and filtered stderr for checking messages
    let combined_output = if stdout.is_empty() {
        filtered_stderr.clone()
    } else if filtered_stderr.is_empty() {
        stdout.clone()
    } else {
        format!("{}\n{}", stdout, filtered_stderr)
    };

    (success, combined_output, stdout)
}

fn setup_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

const LOAD_ORDER_154: &str = "\
[FLD Patch](https://example.com/fld) [1.54-1.1.2]

Heart of Africa [0.2] ([AIO](https://example.com/aio))
~~Old Mod [1.0]~~ (unavailable - reuploads exist)
Kalybay - a lost Road to Aral city
";

/// Create a local load order directory and point loadorder.toml at it
fn setup_local_source(test_dir: &str, files: &[(&str, &str)]) {
    let orders = Path::new(test_dir).join("orders");
    fs::create_dir_all(&orders).unwrap();
    for (name, content) in files {
        fs::write(orders.join(name), content).unwrap();
    }

    let (success, output, _) = run_command(&["init", "--local-dir", "orders"], test_dir);
    assert!(success, "Init should succeed. output: {}", output);
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).unwrap_or_else(|e| panic!("Invalid JSON ({}): {}", e, stdout))
}

#[test]
fn test_init_creates_config() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();

    let (success, output, _) = run_command(&["init", "--user", "someone"], test_dir);

    assert!(success, "Init command should succeed. output: {}", output);
    assert!(
        output.contains("Initialized"),
        "Expected 'Initialized' in output: {}",
        output
    );

    let config_path = format!("{}/loadorder.toml", test_dir);
    assert!(Path::new(&config_path).exists(), "Config file should be created");

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[repository]"));
    assert!(content.contains("someone"));
    assert!(content.contains("loadorder-db"));
}

#[test]
fn test_init_skips_if_exists() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();

    let (success1, _, _) = run_command(&["init"], test_dir);
    assert!(success1);

    let (success2, output, _) = run_command(&["init", "--user", "other"], test_dir);
    assert!(success2, "Second init should succeed. output: {}", output);
    assert!(
        output.contains("skipping"),
        "Expected skip notice in output: {}",
        output
    );

    let content = fs::read_to_string(format!("{}/loadorder.toml", test_dir)).unwrap();
    assert!(!content.contains("other"));
}

#[test]
fn test_parse_file_plain_output() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    let file = temp_dir.path().join("list.txt");
    fs::write(&file, LOAD_ORDER_154).unwrap();

    let (success, output, _) = run_command(&["parse", file.to_str().unwrap()], test_dir);

    assert!(success, "Parse should succeed. output: {}", output);
    assert!(output.contains("4 mods"), "Expected mod count: {}", output);
    assert!(output.contains("FLD Patch"));
    assert!(output.contains("Version: 1.54-1.1.2"));
    assert!(output.contains("AIO: https://example.com/aio"));
    assert!(output.contains("unavailable (reuploads exist)"));
    assert!(
        output.contains("Version: N/A"),
        "Unversioned mods should show N/A: {}",
        output
    );
}

#[test]
fn test_parse_file_json() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    let file = temp_dir.path().join("list.txt");
    fs::write(&file, LOAD_ORDER_154).unwrap();

    let (success, output, stdout) =
        run_command(&["parse", file.to_str().unwrap(), "--json"], test_dir);
    assert!(success, "Parse should succeed. output: {}", output);

    let json = parse_json(&stdout);
    assert_eq!(json["schema_version"], 1);
    let mods = json["mods"].as_array().unwrap();
    assert_eq!(mods.len(), 4);

    assert_eq!(mods[0]["name"], "FLD Patch");
    assert_eq!(mods[0]["primaryLink"], "https://example.com/fld");
    assert_eq!(mods[0]["version"], "1.54-1.1.2");
    assert_eq!(mods[0]["unavailable"], false);

    assert_eq!(mods[1]["aioLink"], "https://example.com/aio");
    assert!(mods[1].get("primaryLink").is_none());

    assert_eq!(mods[2]["name"], "Old Mod");
    assert_eq!(mods[2]["unavailable"], true);
    assert_eq!(mods[2]["note"], "unavailable (reuploads exist)");

    assert_eq!(mods[3]["name"], "Kalybay - a lost Road to Aral city");
    assert!(mods[3].get("version").is_none());
}

#[test]
fn test_parse_explain_reports_notation() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    let file = temp_dir.path().join("list.txt");
    fs::write(&file, LOAD_ORDER_154).unwrap();

    let (success, output, stdout) = run_command(
        &["parse", file.to_str().unwrap(), "--json", "--explain"],
        test_dir,
    );
    assert!(success, "Parse should succeed. output: {}", output);

    let json = parse_json(&stdout);
    let notations: Vec<&str> = json["mods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["notation"].as_str().unwrap())
        .collect();
    assert_eq!(
        notations,
        vec!["linked", "aio_only", "unavailable", "bare_name"]
    );
}

#[test]
fn test_parse_missing_file_fails() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();

    let (success, output, _) = run_command(&["parse", "does-not-exist.txt"], test_dir);

    assert!(!success, "Parse should fail. output: {}", output);
    assert!(
        output.contains("Failed to read"),
        "Expected read error in output: {}",
        output
    );
}

#[test]
fn test_versions_lists_sorted_tokens() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(
        test_dir,
        &[
            ("loadorder154.txt", LOAD_ORDER_154),
            ("loadorder150.txt", "Mod A [1.0]\n"),
            ("notes.md", "ignored"),
        ],
    );

    let (success, output, stdout) = run_command(&["versions", "--json"], test_dir);
    assert!(success, "Versions should succeed. output: {}", output);

    let json = parse_json(&stdout);
    let versions = json["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0]["token"], "150");
    assert_eq!(versions[0]["display"], "1.50");
    assert_eq!(versions[1]["token"], "154");
    assert_eq!(versions[1]["display"], "1.54");

    let (success, output, _) = run_command(&["versions"], test_dir);
    assert!(success);
    assert!(output.contains("1.54"), "Expected display version: {}", output);
}

#[test]
fn test_versions_empty_source() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(test_dir, &[]);

    let (success, output, _) = run_command(&["versions"], test_dir);

    assert!(success, "Versions should succeed. output: {}", output);
    assert!(
        output.contains("No game versions found"),
        "Expected empty notice: {}",
        output
    );
}

#[test]
fn test_show_defaults_to_first_version() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(
        test_dir,
        &[
            ("loadorder154.txt", LOAD_ORDER_154),
            ("loadorder150.txt", "Mod A [1.0]\n"),
        ],
    );

    let (success, output, stdout) = run_command(&["show", "--json"], test_dir);
    assert!(success, "Show should succeed. output: {}", output);

    let json = parse_json(&stdout);
    assert_eq!(json["version"], "150");
    assert_eq!(json["display_version"], "1.50");
    assert_eq!(json["mods"][0]["name"], "Mod A");
}

#[test]
fn test_show_specific_version() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(test_dir, &[("loadorder154.txt", LOAD_ORDER_154)]);

    let (success, output, _) = run_command(&["show", "154"], test_dir);

    assert!(success, "Show should succeed. output: {}", output);
    assert!(output.contains("Load order for 1.54 (4 mods)"), "{}", output);
    assert!(output.contains("Heart of Africa"));
    assert!(output.contains("Old Mod"));
}

#[test]
fn test_show_hide_unavailable() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(test_dir, &[("loadorder154.txt", LOAD_ORDER_154)]);

    let (success, output, stdout) =
        run_command(&["show", "154", "--json", "--hide-unavailable"], test_dir);
    assert!(success, "Show should succeed. output: {}", output);

    let json = parse_json(&stdout);
    let mods = json["mods"].as_array().unwrap();
    assert_eq!(mods.len(), 3);
    assert!(mods.iter().all(|m| m["unavailable"] == false));
}

#[test]
fn test_show_missing_version() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(test_dir, &[("loadorder154.txt", LOAD_ORDER_154)]);

    let (success, output, _) = run_command(&["show", "999"], test_dir);

    assert!(!success, "Show should fail for unknown version. output: {}", output);
    assert!(
        output.contains("No load order file found for version 999"),
        "Expected not-found message: {}",
        output
    );
}

#[test]
fn test_show_empty_file() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(test_dir, &[("loadorder154.txt", "\n   \n")]);

    let (success, output, _) = run_command(&["show", "154"], test_dir);

    assert!(success, "Show should succeed. output: {}", output);
    assert!(
        output.contains("The load order file for version 154 is empty"),
        "Expected empty-file message: {}",
        output
    );
}

#[test]
fn test_show_empty_file_json() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(test_dir, &[("loadorder154.txt", "\n   \n")]);

    let (success, output, stdout) = run_command(&["show", "154", "--json"], test_dir);
    assert!(success, "Show should succeed. output: {}", output);

    let json = parse_json(&stdout);
    assert_eq!(json["version"], "154");
    assert_eq!(json["display_version"], "1.54");
    assert!(json["mods"].as_array().unwrap().is_empty());
}

#[test]
fn test_show_hide_unavailable_leaves_nothing() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(
        test_dir,
        &[(
            "loadorder154.txt",
            "~~Old Mod [1.0]~~ (paid mod)\n~~Gone Mod~~ - reuploads exist\n",
        )],
    );

    let (success, output, _) = run_command(&["show", "154", "--hide-unavailable"], test_dir);

    assert!(success, "Show should succeed. output: {}", output);
    assert!(
        output.contains("No available mods in the load order for version 154"),
        "Expected empty-list notice: {}",
        output
    );
    assert!(!output.contains("Load order for"), "No header expected: {}", output);
}

#[test]
fn test_show_without_versions() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();
    setup_local_source(test_dir, &[]);

    let (success, output, _) = run_command(&["show"], test_dir);

    assert!(success, "Show should succeed. output: {}", output);
    assert!(
        output.contains("No game versions found"),
        "Expected empty notice: {}",
        output
    );
}

#[test]
fn test_missing_local_directory_is_error() {
    let temp_dir = setup_test_dir();
    let test_dir = temp_dir.path().to_str().unwrap();

    let (success, _, _) = run_command(&["init", "--local-dir", "nowhere"], test_dir);
    assert!(success);

    let (success, output, _) = run_command(&["versions"], test_dir);
    assert!(!success, "Versions should fail. output: {}", output);
    assert!(
        output.contains("Failed to read load order directory"),
        "Expected directory error: {}",
        output
    );
}
