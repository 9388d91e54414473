//! # Digit Subcommands
//!
//! `format`, `normalize`, and `validate` over user-supplied digit strings.
//!
//! ```bash
//! mobi format 650073047435           # 650-073-047-435
//! mobi normalize "(650) 073-047-435" # 650073047435
//! mobi validate 650073047435892761234 650-073-047-435
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use mobi_core::{classify, format_grouped, normalize, Resolution};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for `mobi format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Digit string of 12, 15, 18, or 21 digits.
    pub digits: String,
}

/// Arguments for `mobi normalize`.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// User input, possibly containing `-`, spaces, `.`, or parentheses.
    pub input: String,

    /// Also require the result to be a valid identifier length.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `mobi validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Digit strings to check.
    #[arg(required = true)]
    pub digits: Vec<String>,
}

#[derive(Serialize)]
struct ValidationReport {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolution: Option<Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute `mobi format`.
pub fn run_format(args: &FormatArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let formatted = format_grouped(&args.digits)
        .with_context(|| format!("cannot format {:?}", args.digits))?;
    match config.output {
        OutputFormat::Json => {
            let doc = serde_json::json!({ "input": args.digits, "formatted": formatted });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        OutputFormat::Text => writeln!(out, "{formatted}")?,
    }
    Ok(0)
}

/// Execute `mobi normalize`.
pub fn run_normalize(args: &NormalizeArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let digits =
        normalize(&args.input).with_context(|| format!("cannot normalize {:?}", args.input))?;
    let resolution = if args.strict {
        Some(classify(&digits).with_context(|| format!("{digits:?} is not a valid identifier"))?)
    } else {
        None
    };
    match config.output {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "input": args.input,
                "digits": digits,
                "resolution": resolution,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        OutputFormat::Text => writeln!(out, "{digits}")?,
    }
    Ok(0)
}

/// Execute `mobi validate`. Returns exit code 1 if any input is invalid.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<ValidationReport> = args
        .digits
        .iter()
        .map(|input| match classify(input) {
            Ok(resolution) => ValidationReport {
                input: input.clone(),
                valid: true,
                resolution: Some(resolution),
                error: None,
            },
            Err(e) => ValidationReport {
                input: input.clone(),
                valid: false,
                resolution: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    match config.output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?,
        OutputFormat::Text => {
            for r in &reports {
                match (&r.resolution, &r.error) {
                    (Some(res), _) => writeln!(out, "OK: {} ({res})", r.input)?,
                    (None, Some(err)) => writeln!(out, "INVALID: {}: {err}", r.input)?,
                    (None, None) => writeln!(out, "INVALID: {}", r.input)?,
                }
            }
        }
    }

    let failed = reports.iter().filter(|r| !r.valid).count();
    if failed > 0 {
        tracing::info!(failed, total = reports.len(), "validation failed");
        Ok(1)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> CliConfig {
        CliConfig::default()
    }

    fn capture(f: impl FnOnce(&mut dyn Write) -> Result<u8>) -> (u8, String) {
        let mut out = Vec::new();
        let code = f(&mut out as &mut dyn Write).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn format_groups_digits() {
        let args = FormatArgs {
            digits: "650073047435".into(),
        };
        let (code, out) = capture(|o| run_format(&args, &text(), o));
        assert_eq!(code, 0);
        assert_eq!(out, "650-073-047-435\n");
    }

    #[test]
    fn format_rejects_bad_length() {
        let args = FormatArgs {
            digits: "12345".into(),
        };
        let mut out = Vec::new();
        assert!(run_format(&args, &text(), &mut out).is_err());
    }

    #[test]
    fn normalize_phone_style() {
        let args = NormalizeArgs {
            input: "(650) 073-047-435".into(),
            strict: false,
        };
        let (_, out) = capture(|o| run_normalize(&args, &text(), o));
        assert_eq!(out, "650073047435\n");
    }

    #[test]
    fn normalize_strict_checks_length() {
        let args = NormalizeArgs {
            input: "650-073".into(),
            strict: true,
        };
        let mut out = Vec::new();
        assert!(run_normalize(&args, &text(), &mut out).is_err());

        let args = NormalizeArgs {
            input: "650-073".into(),
            strict: false,
        };
        let (_, out) = capture(|o| run_normalize(&args, &text(), o));
        assert_eq!(out, "650073\n");
    }

    #[test]
    fn normalize_rejects_letters() {
        let args = NormalizeArgs {
            input: "650-O73".into(),
            strict: false,
        };
        let mut out = Vec::new();
        let err = run_normalize(&args, &text(), &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<mobi_core::MobiError>(),
            Some(&mobi_core::MobiError::InvalidChar { ch: 'O', position: 4 })
        );
    }

    #[test]
    fn validate_mixed_inputs() {
        let args = ValidateArgs {
            digits: vec!["650073047435892761234".into(), "650-073-047-435".into()],
        };
        let (code, out) = capture(|o| run_validate(&args, &text(), o));
        assert_eq!(code, 1);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "OK: 650073047435892761234 (full)");
        assert!(lines[1].starts_with("INVALID: 650-073-047-435: "));
    }

    #[test]
    fn validate_all_ok() {
        let args = ValidateArgs {
            digits: vec!["650073047435".into(), "650073047435892".into()],
        };
        let (code, _) = capture(|o| run_validate(&args, &text(), o));
        assert_eq!(code, 0);
    }

    #[test]
    fn validate_json() {
        let args = ValidateArgs {
            digits: vec!["650073047435".into(), "6500730474".into()],
        };
        let config = CliConfig::default().with_json(true);
        let (_, out) = capture(|o| run_validate(&args, &config, o));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["valid"], true);
        assert_eq!(v[0]["resolution"], "display");
        assert_eq!(v[1]["valid"], false);
        assert!(v[1]["error"].as_str().unwrap().contains("length"));
    }
}
