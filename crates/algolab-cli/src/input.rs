//! Command input: `--item` / `--conflict` flag values and stdin prompts.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use algolab_common::{Error, VertexId};
use algolab_core::algorithms::{FractionalItem, KnapsackItem};
use anyhow::{Result, anyhow, bail};

/// A `--item name:weight:utility[:critical]` value.
#[derive(Debug, Clone)]
pub struct ItemArg(pub KnapsackItem);

impl FromStr for ItemArg {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let (name, weight, utility, critical) = match parts.as_slice() {
            [name, weight, utility] => (*name, *weight, *utility, "n"),
            [name, weight, utility, critical] => (*name, *weight, *utility, *critical),
            _ => return Err(invalid(s, "expected name:weight:utility[:critical]")),
        };
        let weight = weight.parse::<usize>().map_err(|e| invalid(s, e))?;
        let utility = utility.parse::<u64>().map_err(|e| invalid(s, e))?;
        let critical = parse_flag(critical).ok_or_else(|| invalid(s, "critical must be y or n"))?;

        let item = KnapsackItem::new(weight, utility)?.with_critical(critical);
        Ok(Self(if name.is_empty() { item } else { item.named(name) }))
    }
}

/// A `--item name:weight:value[:y|n]` value; the flag marks divisible goods.
#[derive(Debug, Clone)]
pub struct BoatItemArg(pub FractionalItem);

impl FromStr for BoatItemArg {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let (name, weight, value, divisible) = match parts.as_slice() {
            [name, weight, value] => (*name, *weight, *value, "n"),
            [name, weight, value, divisible] => (*name, *weight, *value, *divisible),
            _ => return Err(invalid(s, "expected name:weight:value[:y|n]")),
        };
        let weight = weight.parse::<f64>().map_err(|e| invalid(s, e))?;
        let value = value.parse::<f64>().map_err(|e| invalid(s, e))?;
        let divisible =
            parse_flag(divisible).ok_or_else(|| invalid(s, "divisible must be y or n"))?;

        Ok(Self(FractionalItem::new(name, weight, value, divisible)?))
    }
}

/// A `--conflict u-v` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictArg(pub VertexId, pub VertexId);

impl FromStr for ConflictArg {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        let (u, v) = s
            .split_once('-')
            .ok_or_else(|| invalid(s, "expected u-v"))?;
        let u = u.trim().parse::<u32>().map_err(|e| invalid(s, e))?;
        let v = v.trim().parse::<u32>().map_err(|e| invalid(s, e))?;
        Ok(Self(VertexId::new(u), VertexId::new(v)))
    }
}

fn invalid(raw: &str, reason: impl Display) -> Error {
    Error::InvalidItem(format!("{raw:?}: {reason}"))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Line-oriented prompts. Questions go to `writer`, answers come from `reader`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompts on stderr so stdout stays clean for results.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Asks `label` and returns the trimmed answer.
    pub fn line(&mut self, label: &str) -> Result<String> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            bail!("input ended while waiting for: {}", label.trim_end());
        }
        Ok(buf.trim().to_string())
    }

    /// Asks `label` and parses the answer. Unparseable input is an error.
    pub fn ask<T>(&mut self, label: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.line(label)?;
        raw.parse::<T>()
            .map_err(|e| anyhow!("invalid input {raw:?}: {e}"))
    }

    /// Asks a yes/no question; anything but `y`/`yes` means no.
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        let raw = self.line(label)?;
        Ok(matches!(raw.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

/// Unwraps `--item` values, or prompts for items when none were given.
pub fn knapsack_items_or_prompt<R: BufRead, W: Write>(
    args: Vec<ItemArg>,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<KnapsackItem>> {
    if args.is_empty() {
        prompt_knapsack_items(prompter)
    } else {
        Ok(args.into_iter().map(|ItemArg(item)| item).collect())
    }
}

/// Prompts for a count followed by each item's name, weight, utility and
/// critical flag.
pub fn prompt_knapsack_items<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<KnapsackItem>> {
    let count: usize = prompter.ask("Enter number of items N: ")?;
    let mut items = Vec::with_capacity(count);

    for i in 1..=count {
        let name = prompter.line(&format!("Item {i} name: "))?;
        let weight: usize = prompter.ask(&format!("Item {i} weight (kg): "))?;
        let utility: u64 = prompter.ask(&format!("Item {i} utility: "))?;
        let critical = prompter.confirm(&format!("Is item {i} critical? (y/n): "))?;

        let item = KnapsackItem::new(weight, utility)?.with_critical(critical);
        items.push(if name.is_empty() { item } else { item.named(name) });
    }
    Ok(items)
}

/// Prompts for a count followed by each item type. An item with a
/// non-positive weight is asked for again.
pub fn prompt_boat_items<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<FractionalItem>> {
    let count: usize = prompter.ask("Enter number of different item types n: ")?;
    let mut items = Vec::with_capacity(count);

    for i in 1..=count {
        let mut name = prompter.line(&format!("Item {i} name: "))?;
        if name.is_empty() {
            name = format!("Item {i}");
        }
        loop {
            let weight: f64 = prompter.ask(&format!("{name} weight (kg): "))?;
            let value: f64 = prompter.ask(&format!("{name} value: "))?;
            let divisible = prompter.confirm(&format!("Is {name} divisible? (y/n): "))?;

            match FractionalItem::new(name.as_str(), weight, value, divisible) {
                Ok(item) => {
                    items.push(item);
                    break;
                }
                Err(e) => tracing::warn!(error = %e, "item rejected, enter it again"),
            }
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(answers: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(answers.to_string()), Vec::new())
    }

    #[test]
    fn test_item_arg() {
        let ItemArg(item) = "medicine:3:10:y".parse().unwrap();
        assert_eq!(item.name.as_deref(), Some("medicine"));
        assert_eq!((item.weight, item.utility, item.critical), (3, 10, true));

        let ItemArg(item) = "tents:2:15".parse().unwrap();
        assert!(!item.critical);
    }

    #[test]
    fn test_item_arg_rejects_bad_values() {
        for raw in ["tents", "tents:x:15", "tents:0:15", "tents:2:15:maybe", "a:1:2:y:z"] {
            assert!(raw.parse::<ItemArg>().is_err(), "{raw}");
        }
    }

    #[test]
    fn test_boat_item_arg() {
        let BoatItemArg(item) = "rice:20:100:y".parse().unwrap();
        assert_eq!(item.name, "rice");
        assert!(item.divisible);
        assert!((item.density() - 5.0).abs() < 1e-12);

        assert!("rice:-1:100:y".parse::<BoatItemArg>().is_err());
    }

    #[test]
    fn test_conflict_arg() {
        let c: ConflictArg = "3-5".parse().unwrap();
        assert_eq!(c, ConflictArg(VertexId::new(3), VertexId::new(5)));
        assert!("3".parse::<ConflictArg>().is_err());
        assert!("a-b".parse::<ConflictArg>().is_err());
    }

    #[test]
    fn test_ask_parses_and_rejects() {
        let mut p = prompter("12\nabc\n");
        assert_eq!(p.ask::<usize>("W: ").unwrap(), 12);
        assert!(p.ask::<usize>("N: ").is_err());
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        assert!(p.line("name: ").is_err());
    }

    #[test]
    fn test_prompt_knapsack_items() {
        let mut p = prompter("2\nwater\n4\n9\ny\n\n1\n2\nn\n");
        let items = prompt_knapsack_items(&mut p).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_deref(), Some("water"));
        assert!(items[0].critical);
        assert_eq!(items[1].label(1), "Item 2");
        assert!(!items[1].critical);

        let asked = String::from_utf8(p.writer).unwrap();
        assert!(asked.starts_with("Enter number of items N: "));
    }

    #[test]
    fn test_flag_items_skip_prompts() {
        let args = vec!["a:1:2".parse().unwrap(), "b:3:4:y".parse().unwrap()];
        let mut p = prompter("");
        let items = knapsack_items_or_prompt(args, &mut p).unwrap();
        assert_eq!(items.len(), 2);
        assert!(p.writer.is_empty());
    }

    #[test]
    fn test_prompt_boat_items_reasks_bad_weight() {
        let mut p = prompter("1\nsand\n0\n5\nn\n10\n5\ny\n");
        let items = prompt_boat_items(&mut p).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].weight, 10.0);
        assert!(items[0].divisible);
    }
}
