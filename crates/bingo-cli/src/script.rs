//! Session script parsing.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! deposit 100
//! start hard zenith extra
//! run 1
//! quest 23010
//! reroll
//! cart
//! stop
//! ```

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use bingo_core::{Difficulty, GauntletBoost, GauntletBoosts};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// `start` alone uses the current selection
    Start(Option<StartArgs>),
    Stop,
    Quest(u32),
    Run(u32),
    Reroll,
    Cart,
    Deposit(u64),
    Select(Difficulty),
    Boost(GauntletBoost),
    Extra(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartArgs {
    pub difficulty: Difficulty,
    pub boosts: GauntletBoosts,
    pub extra_boost: bool,
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptCommand>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
        .map(|(number, line)| parse_line(line).with_context(|| format!("line {}: {:?}", number, line)))
        .collect()
}

fn parse_line(line: &str) -> Result<ScriptCommand> {
    let mut words = line.split_whitespace();
    let keyword = words.next().ok_or_else(|| anyhow!("empty command"))?;
    let rest: Vec<&str> = words.collect();

    let command = match keyword.to_ascii_lowercase().as_str() {
        "start" => ScriptCommand::Start(parse_start_args(&rest)?),
        "stop" => ScriptCommand::Stop,
        "quest" => ScriptCommand::Quest(single_number(&rest)?),
        "run" => ScriptCommand::Run(single_number(&rest)?),
        "reroll" => ScriptCommand::Reroll,
        "cart" => ScriptCommand::Cart,
        "deposit" => ScriptCommand::Deposit(single_number(&rest)?),
        "select" => ScriptCommand::Select(parse_difficulty(single_word(&rest)?)?),
        "boost" => ScriptCommand::Boost(parse_boost(single_word(&rest)?)?),
        "extra" => ScriptCommand::Extra(parse_switch(single_word(&rest)?)?),
        other => bail!("unknown command {:?}", other),
    };
    Ok(command)
}

fn parse_start_args(words: &[&str]) -> Result<Option<StartArgs>> {
    let Some((first, modifiers)) = words.split_first() else {
        return Ok(None);
    };

    let mut args = StartArgs {
        difficulty: parse_difficulty(first)?,
        boosts: GauntletBoosts::NONE,
        extra_boost: false,
    };
    for word in modifiers {
        if word.eq_ignore_ascii_case("extra") {
            args.extra_boost = true;
        } else {
            args.boosts = args.boosts.with(parse_boost(word)?);
        }
    }
    Ok(Some(args))
}

fn single_word<'a>(words: &[&'a str]) -> Result<&'a str> {
    match words {
        [word] => Ok(*word),
        _ => bail!("expected exactly one argument"),
    }
}

fn single_number<T: FromStr>(words: &[&str]) -> Result<T> {
    let word = single_word(words)?;
    word.parse()
        .map_err(|_| anyhow!("invalid number {:?}", word))
}

fn parse_difficulty(word: &str) -> Result<Difficulty> {
    Difficulty::from_str(word).map_err(|_| anyhow!("unknown difficulty {:?}", word))
}

fn parse_boost(word: &str) -> Result<GauntletBoost> {
    GauntletBoost::from_str(word).map_err(|_| anyhow!("unknown boost {:?}", word))
}

fn parse_switch(word: &str) -> Result<bool> {
    match word.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => bail!("expected on/off, got {:?}", word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_script() {
        let script = "\
# warm up
deposit 50
start hard zenith MUSOU extra
run 7
quest 23010   # rathalos
reroll
cart
stop
";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 7);
        assert_eq!(commands[0], ScriptCommand::Deposit(50));
        assert_eq!(
            commands[1],
            ScriptCommand::Start(Some(StartArgs {
                difficulty: Difficulty::Hard,
                boosts: GauntletBoosts::NONE
                    .with(GauntletBoost::Zenith)
                    .with(GauntletBoost::Musou),
                extra_boost: true,
            }))
        );
        assert_eq!(commands[3], ScriptCommand::Quest(23010));
        assert_eq!(commands[6], ScriptCommand::Stop);
    }

    #[test]
    fn test_bare_start_uses_selection() {
        let commands = parse_script("select extreme\nboost solstice\nextra on\nstart").unwrap();
        assert_eq!(
            commands,
            vec![
                ScriptCommand::Select(Difficulty::Extreme),
                ScriptCommand::Boost(GauntletBoost::Solstice),
                ScriptCommand::Extra(true),
                ScriptCommand::Start(None),
            ]
        );
    }

    #[test]
    fn test_errors_report_line_number() {
        let err = parse_script("start easy\nquest abc").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));

        assert!(parse_script("dance").is_err());
        assert!(parse_script("start nightmare").is_err());
        assert!(parse_script("run 1 2").is_err());
        assert!(parse_script("extra maybe").is_err());
    }
}
