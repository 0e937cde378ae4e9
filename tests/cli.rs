//! End-to-end tests of the `ik-shortcodes` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(root: &Path, env_url: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ik-shortcodes"));
    cmd.current_dir(root)
        .arg("--root")
        .arg(root)
        .args(args)
        .env_remove("IMAGEKIT_URL")
        .env_remove("RUST_LOG");
    if let Some(url) = env_url {
        cmd.env("IMAGEKIT_URL", url);
    }
    cmd.output().expect("failed to run ik-shortcodes")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn render_bgimg_uses_env_url() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(
        tmp.path(),
        Some("https://ik.imagekit.io/acct"),
        &["render", "bgimg", "hero.jpg"],
    ));
    assert_eq!(out.trim_end(), "https://ik.imagekit.io/acct/tr:w-1920,f-auto,q-80/hero.jpg");
}

#[test]
fn render_falls_back_to_default_url() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), None, &["render", "bgimg", "hero.jpg"]));
    assert_eq!(
        out.trim_end(),
        "https://ik.imagekit.io/your-account/tr:w-1920,f-auto,q-80/hero.jpg"
    );
}

#[test]
fn config_file_url_used_without_env() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[imagekit]\nurl = \"https://ik.imagekit.io/fromfile\"\n",
    )
    .unwrap();
    let out = stdout(&run(tmp.path(), None, &["render", "avatar", "p.jpg", "Jane", "96"]));
    assert!(out.contains("https://ik.imagekit.io/fromfile/tr:w-96,h-96,fo-face,r-max,f-auto/p.jpg"));
}

#[test]
fn env_wins_over_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[imagekit]\nurl = \"https://ik.imagekit.io/fromfile\"\n",
    )
    .unwrap();
    let out = stdout(&run(
        tmp.path(),
        Some("https://ik.imagekit.io/fromenv"),
        &["render", "img", "a.jpg", "A"],
    ));
    assert!(out.contains("https://ik.imagekit.io/fromenv/tr:w-800,f-auto,q-80/a.jpg"));
}

#[test]
fn unknown_shortcode_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), None, &["render", "carousel"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("carousel"));
}

#[test]
fn rust_log_from_dotenv_is_honoured() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".env"), "RUST_LOG=info\n").unwrap();
    let output = run(tmp.path(), None, &["render", "bgimg", "hero.jpg"]);
    stdout(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration resolved"), "{stderr}");
}

#[test]
fn filter_slugify() {
    let tmp = TempDir::new().unwrap();
    let out = stdout(&run(tmp.path(), None, &["filter", "slugify", "Hello World"]));
    assert_eq!(out.trim_end(), "hello-world");
}

#[test]
fn copy_and_pages() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("src/assets/images")).unwrap();
    fs::create_dir_all(root.join("src/pages/blog")).unwrap();
    fs::write(root.join("src/assets/images/a.jpg"), "a").unwrap();
    fs::write(root.join("src/robots.txt"), "User-agent: *\n").unwrap();
    fs::write(root.join("src/pages/index.njk"), "").unwrap();
    fs::write(root.join("src/pages/blog/post.njk"), "").unwrap();

    let out = stdout(&run(root, None, &["copy"]));
    assert!(out.contains("Copied 2 files"), "{out}");
    assert!(root.join("_site/images/a.jpg").is_file());
    assert!(root.join("_site/robots.txt").is_file());

    let out = stdout(&run(root, None, &["pages"]));
    assert!(out.contains("001 src/pages/blog/post.njk"), "{out}");
    assert!(out.contains("002 src/pages/index.njk"), "{out}");
    assert!(out.contains("2 pages"));
}

#[test]
fn check_reports_invalid_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[imagekit]\nurl = \"\"\n").unwrap();
    let output = run(tmp.path(), None, &["check"]);
    assert!(!output.status.success());
}

#[test]
fn gen_config_is_loadable() {
    let tmp = TempDir::new().unwrap();
    let toml = stdout(&run(tmp.path(), None, &["gen-config"]));
    fs::write(tmp.path().join("config.toml"), toml).unwrap();
    let out = stdout(&run(tmp.path(), None, &["check"]));
    assert!(out.contains("Configuration is valid"));
}
