use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    iconseek completions bash > ~/.bash_completion.d/iconseek\n\n\
                  Generate zsh completions:\n    iconseek completions zsh > ~/.zfunc/_iconseek\n\n\
                  Generate fish completions:\n    iconseek completions fish > ~/.config/fish/completions/iconseek.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
