use std::collections::BTreeMap;

use crate::error::Error;
use crate::parse;

/// User-authored mapping from short command names to raw shell text.
/// Lookup is exact and case-sensitive; never mutated by resolution.
pub type CommandTable = BTreeMap<String, String>;

// The self-invocation pattern this tool is reached through: `cargo exec <name>`
const INVOKER: &str = "cargo";
const SUBCOMMAND: &str = "exec";

/// Rewrites every `cargo exec <name>` call in `raw` into the literal
/// command string configured for `<name>`, so running one configured
/// command from another does not spawn a nested cargo process.
///
/// Single pass over the token stream: substituted text is inserted
/// verbatim and not re-scanned, so a self-invocation inside a target's
/// own definition stays literal. Tokens that are not part of a match
/// are re-emitted through [`parse::quote`].
pub fn resolve(raw: &str, table: &CommandTable) -> Result<String, Error> {
    let tokens = parse::split(raw)?;
    let mut pieces: Vec<String> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        // Three-token lookahead, guarded at the tail
        let target = if i + 2 < tokens.len()
            && tokens[i] == INVOKER
            && tokens[i + 1] == SUBCOMMAND
        {
            table.get(&tokens[i + 2])
        } else {
            None
        };

        match target {
            Some(cmd) => {
                pieces.push(cmd.clone());
                i += 3;
            }
            None => {
                pieces.push(parse::quote(&tokens[i]).into_owned());
                i += 1;
            }
        }
    }

    Ok(pieces.join(" "))
}

/// Looks up `name` in the table, optionally resolves self-invocations,
/// and appends `extra_args` with safe quoting. Pure string work; the
/// caller hands the result to the shell.
pub fn build_invocation(
    name: &str,
    extra_args: &[String],
    table: &CommandTable,
    resolve_enabled: bool,
) -> Result<String, Error> {
    let cmd = table
        .get(name)
        .ok_or_else(|| Error::CommandNotFound(name.to_string()))?;

    let cmd = if resolve_enabled {
        resolve(cmd, table)?
    } else {
        cmd.clone()
    };

    if extra_args.is_empty() {
        Ok(cmd)
    } else {
        Ok(format!("{cmd} {}", parse::join(extra_args)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn table(entries: &[(&str, &str)]) -> CommandTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_self_invocation_triple() {
        let t = table(&[("print", "printf")]);
        assert_eq!(
            resolve("cargo exec print 'Hello '", &t).unwrap(),
            "printf 'Hello '"
        );
    }

    #[test]
    fn plain_command_passes_through() {
        let t = table(&[("print", "printf")]);
        assert_eq!(
            resolve("echo hello && echo world", &t).unwrap(),
            "echo hello && echo world"
        );
    }

    #[test]
    fn unknown_target_is_left_alone() {
        let t = table(&[("print", "printf")]);
        assert_eq!(
            resolve("cargo exec missing", &t).unwrap(),
            "cargo exec missing"
        );
    }

    #[test]
    fn lookahead_stops_at_the_tail() {
        let t = table(&[("print", "printf")]);
        assert_eq!(resolve("cargo exec", &t).unwrap(), "cargo exec");
        assert_eq!(resolve("cargo", &t).unwrap(), "cargo");
    }

    #[test]
    fn substitutes_every_occurrence_in_one_pass() {
        let t = table(&[("a", "echo A"), ("b", "echo B")]);
        assert_eq!(
            resolve("cargo exec a && cargo exec b", &t).unwrap(),
            "echo A && echo B"
        );
    }

    #[test]
    fn nested_self_invocation_is_not_expanded() {
        // `outer` resolves to a string that itself names `inner`; one
        // pass means the inner call stays literal.
        let t = table(&[("outer", "cargo exec inner"), ("inner", "echo deep")]);
        assert_eq!(
            resolve("cargo exec outer", &t).unwrap(),
            "cargo exec inner"
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let t = table(&[("print", "printf")]);
        assert_eq!(
            resolve("cargo exec PRINT", &t).unwrap(),
            "cargo exec PRINT"
        );
        assert!(build_invocation("Print", &[], &t, false).is_err());
    }

    #[test]
    fn build_looks_up_and_appends_quoted_args() {
        let t = table(&[("test-script", "printf")]);
        let cmd =
            build_invocation("test-script", &["Hello World\n".to_string()], &t, false).unwrap();
        assert_eq!(cmd, "printf 'Hello World\n'");
    }

    #[test]
    fn build_with_empty_args_adds_nothing() {
        let t = table(&[("greet", "echo Hello World")]);
        let cmd = build_invocation("greet", &[], &t, false).unwrap();
        assert_eq!(cmd, "echo Hello World");
    }

    #[test]
    fn build_without_resolve_keeps_literal_tokens() {
        let t = table(&[("print", "printf"), ("wrap", "cargo exec print hi")]);
        let cmd = build_invocation("wrap", &[], &t, false).unwrap();
        assert_eq!(cmd, "cargo exec print hi");
    }

    #[test]
    fn build_with_resolve_rewrites() {
        let t = table(&[("print", "printf"), ("wrap", "cargo exec print hi")]);
        let cmd = build_invocation("wrap", &["x y".to_string()], &t, true).unwrap();
        assert_eq!(cmd, "printf hi 'x y'");
    }

    #[test]
    fn missing_name_is_command_not_found() {
        let t = table(&[]);
        match build_invocation("nope", &[], &t, true) {
            Err(Error::CommandNotFound(name)) => assert_eq!(name, "nope"),
            other => panic!("expected CommandNotFound, got {other:?}"),
        }
    }
}
