#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CommandId {
    Help,
    Set,
    Next,
    Previous,
    Goto,
    Player,
    Card,
    Results,
    Export,
    Html,
    Json,
    Quit,
}

pub(crate) struct ReplCommand {
    pub(crate) id: CommandId,
    pub(crate) name: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) description: &'static str,
    pub(crate) aliases: &'static [&'static str],
}

pub(crate) const REPL_COMMANDS: &[ReplCommand] = &[
    ReplCommand {
        id: CommandId::Help,
        name: "help",
        usage: "help",
        description: "Show this help.",
        aliases: &["?", "-h", "--help"],
    },
    ReplCommand {
        id: CommandId::Set,
        name: "set",
        usage: "set <player> <hole> <round> <score>",
        description: "Enter a score anywhere on the card (1-based, `-` clears).",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Next,
        name: "next",
        usage: "next",
        description: "Move to the next cell.",
        aliases: &["n"],
    },
    ReplCommand {
        id: CommandId::Previous,
        name: "prev",
        usage: "prev",
        description: "Move to the previous cell.",
        aliases: &["p", "previous"],
    },
    ReplCommand {
        id: CommandId::Goto,
        name: "goto",
        usage: "goto <player> <hole> <round>",
        description: "Focus a cell (1-based).",
        aliases: &["g"],
    },
    ReplCommand {
        id: CommandId::Player,
        name: "player",
        usage: "player <player>",
        description: "Switch to a player's card, keeping the current hole.",
        aliases: &["tab"],
    },
    ReplCommand {
        id: CommandId::Card,
        name: "card",
        usage: "card",
        description: "Show the current player's card.",
        aliases: &["show"],
    },
    ReplCommand {
        id: CommandId::Results,
        name: "results",
        usage: "results",
        description: "Finish the game and show the results.",
        aliases: &["finish"],
    },
    ReplCommand {
        id: CommandId::Export,
        name: "export",
        usage: "export [file]",
        description: "Save the scores as CSV.",
        aliases: &["save"],
    },
    ReplCommand {
        id: CommandId::Html,
        name: "html",
        usage: "html [file]",
        description: "Save the results page as HTML.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Json,
        name: "json",
        usage: "json",
        description: "Print the results summary as JSON.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Quit,
        name: "quit",
        usage: "quit",
        description: "Leave without saving.",
        aliases: &["exit", "q"],
    },
];

pub(crate) fn find_command(name: &str) -> Option<&'static ReplCommand> {
    REPL_COMMANDS
        .iter()
        .find(|command| command.name == name || command.aliases.contains(&name))
}

pub(crate) fn build_repl_help() -> String {
    let width = REPL_COMMANDS
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or(0);
    let mut lines = vec![
        "Type a number to score the focused cell and move on, `-` to clear it.".to_string(),
    ];
    for command in REPL_COMMANDS {
        lines.push(format!(
            "  {:<width$}  {}",
            command.usage, command.description
        ));
    }
    lines.join("\n")
}
