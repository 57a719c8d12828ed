use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_prints_boxed_resume() {
    let mut cmd = Command::cargo_bin("vitae").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RAHUL SANTOSH MISTRY"))
        .stdout(predicate::str::contains("ABOUT"))
        .stdout(predicate::str::contains("EXPERIENCE"))
        .stdout(predicate::str::contains("EDUCATION"))
        .stdout(predicate::str::contains("SKILLS"))
        .stdout(predicate::str::contains("KEY PROJECTS"))
        // Outer frame is the double border.
        .stdout(predicate::str::contains("╔"))
        .stdout(predicate::str::contains("╚"));
}

#[test]
fn test_contact_block_present() {
    let mut cmd = Command::cargo_bin("vitae").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "📧 Email: rahulmistry751@gmail.com",
        ))
        .stdout(predicate::str::contains("📍 Location: Bangalore, India"));
}

#[test]
fn test_supplementary_lines_follow_the_box() {
    let mut cmd = Command::cargo_bin("vitae").unwrap();
    let assert = cmd.assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let box_end = output.rfind('╝').expect("frame bottom missing");
    let connect = output
        .find("Want to connect? Reach out via LinkedIn or email!")
        .expect("connect line missing");
    assert!(connect > box_end);
    assert!(output.contains("💡 Tip: Check out my GitHub for more projects and contributions."));
    assert!(output.contains("🎯 Open to exciting opportunities in full-stack development!"));
}

#[test]
fn test_footer_has_last_updated_date() {
    let mut cmd = Command::cargo_bin("vitae").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generated via cargo install vitae"))
        .stdout(predicate::str::contains("Last updated: "));
}

#[test]
fn test_rejects_unexpected_arguments() {
    let mut cmd = Command::cargo_bin("vitae").unwrap();
    cmd.arg("extra").assert().failure();
}
