use std::io::{self, Write};

use crate::config::{parse_base_url, Config};
use crate::error::{AdminError, Result};

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Project Admin Configuration");
    println!("===========================\n");

    let api_url = prompt("Directory service URL (e.g., https://dlab.example.com): ")?;
    if api_url.is_empty() {
        return Err(AdminError::MissingApiUrl);
    }
    let api_url = parse_base_url(&api_url)?;

    let api_token = prompt("API token [optional]: ")?;

    let content = render(api_url.as_str(), &api_token);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AdminError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, content).map_err(|e| AdminError::ConfigWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'projadm' commands!");

    Ok(())
}

fn render(api_url: &str, api_token: &str) -> String {
    let mut content = format!("api_url = {}\n", toml::Value::from(api_url));
    if !api_token.is_empty() {
        content.push_str(&format!("api_token = {}\n", toml::Value::from(api_token)));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_config_parses_back() {
        let content = render("https://dlab.example.com/", "to\"ken");
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://dlab.example.com/"));
        assert_eq!(config.api_token.as_deref(), Some("to\"ken"));
    }

    #[test]
    fn token_is_optional() {
        let content = render("https://dlab.example.com/", "");
        assert!(!content.contains("api_token"));
    }
}
