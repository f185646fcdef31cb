//! Commands that need the API, run against an address that refuses
//! connections. Fetch failures must surface as a clean error exit.

use anyhow::Result;
use dexview_testing::TestWorld;

fn offline_world() -> Result<TestWorld> {
    Ok(TestWorld::new()?
        .with_config("retries = 0\ntimeout_secs = 2\n")?
        .offline())
}

#[test]
fn test_show_rejects_malformed_id_without_fetching() -> Result<()> {
    let world = offline_world()?;

    for id in ["abc", "0", "-4"] {
        let result = world.run(&["show", "--", id])?;
        assert!(!result.success(), "id {} should fail", id);
        assert!(
            result.stderr.contains("Not found"),
            "id {}: {}",
            id,
            result.stderr
        );
    }
    Ok(())
}

#[test]
fn test_show_reports_fetch_failure() -> Result<()> {
    let result = offline_world()?.run(&["show", "25"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("Error: Fetch failed"), "{}", result.stderr);
    assert!(result.stdout.is_empty());
    Ok(())
}

#[test]
fn test_list_reports_fetch_failure() -> Result<()> {
    let result = offline_world()?.run(&["list", "--page", "2"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("Failed to load page 2"), "{}", result.stderr);
    Ok(())
}

#[test]
fn test_browse_reports_fetch_failure() -> Result<()> {
    let result = offline_world()?.json().run(&["browse", "--batches", "3"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("Failed to load batch 1"), "{}", result.stderr);
    Ok(())
}

#[test]
fn test_zero_page_size_is_a_config_error() -> Result<()> {
    let world = TestWorld::new()?.with_config("page_size = 0\n")?.offline();
    let result = world.run(&["list"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("page_size"), "{}", result.stderr);
    Ok(())
}
