//! `config show` / `config init` never touch the network, so these run
//! against a temp config dir only.

use anyhow::Result;
use dexview_testing::TestWorld;

#[test]
fn test_config_show_defaults() -> Result<()> {
    let world = TestWorld::new()?;
    let result = world.run(&["config", "show"])?;

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("page_size = 20"));
    assert!(result.stdout.contains("https://pokeapi.co/api/v2"));
    Ok(())
}

#[test]
fn test_config_show_json_reflects_file_and_env() -> Result<()> {
    let world = TestWorld::new()?
        .with_config("page_size = 12\nretries = 0\n")?
        .offline()
        .json();
    let result = world.run(&["config", "show"])?;

    assert!(result.success(), "stderr: {}", result.stderr);
    let json = result.json()?;
    assert_eq!(json["page_size"], 12);
    assert_eq!(json["retries"], 0);
    assert_eq!(
        json["api_base_url"],
        dexview_testing::world::UNREACHABLE_API_URL
    );
    Ok(())
}

#[test]
fn test_config_show_rejects_malformed_file() -> Result<()> {
    let world = TestWorld::new()?.with_config("page_size = \"many\"\n")?;
    let result = world.run(&["config", "show"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("Error"));
    Ok(())
}

#[test]
fn test_config_init_writes_once() -> Result<()> {
    let world = TestWorld::new()?;

    let first = world.run(&["config", "init"])?;
    assert!(first.success(), "stderr: {}", first.stderr);
    assert!(world.config_path().exists());
    let written = std::fs::read_to_string(world.config_path())?;
    assert!(written.contains("page_size = 20"));

    let second = world.run(&["config", "init"])?;
    assert!(!second.success());
    assert!(second.stderr.contains("--force"));

    let forced = world.run(&["config", "init", "--force"])?;
    assert!(forced.success(), "stderr: {}", forced.stderr);
    Ok(())
}
