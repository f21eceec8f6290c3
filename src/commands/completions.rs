//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use berks_lock::Result;

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell = match args.shell.to_lowercase().as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            eprintln!("Unknown shell: {}", args.shell);
            eprintln!("Supported shells: bash, elvish, fish, powershell, zsh");
            std::process::exit(1);
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "berks-lock", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(shell: &str) -> Result<()> {
        run(&CompletionsArgs {
            shell: shell.to_string(),
        })
    }

    #[test]
    fn test_completions_bash() {
        assert!(completions("bash").is_ok());
    }

    #[test]
    fn test_completions_zsh() {
        assert!(completions("zsh").is_ok());
    }

    #[test]
    fn test_completions_pwsh() {
        assert!(completions("pwsh").is_ok());
    }

    #[test]
    fn test_completions_mixed_case() {
        assert!(completions("Fish").is_ok());
    }
}
