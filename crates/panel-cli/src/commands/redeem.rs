//! Redeem-code command handlers.

use std::io::Write;

use tabled::Tabled;

use panel_api::admin::types::{
    ExportQuery, GenerateRedeemCodes, RedeemCode, RedeemCodeQuery, RedeemCodeStats,
};
use panel_api::AdminClient;

use crate::cli::{GlobalOpts, RedeemArgs, RedeemCommand};
use crate::error::CliError;
use crate::output::{self, OutputFormat};

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct CodeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Type")]
    code_type: &'static str,
    #[tabled(rename = "Value")]
    value: f64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Validity")]
    validity: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&RedeemCode> for CodeRow {
    fn from(c: &RedeemCode) -> Self {
        Self {
            id: c.id,
            code: c.code.clone(),
            code_type: c.code_type.as_str(),
            value: c.value,
            status: output::status_label(c.status),
            group: c.group_id.map(|g| g.to_string()).unwrap_or_default(),
            validity: c
                .validity_days
                .map(|d| format!("{d}d"))
                .unwrap_or_default(),
            created: c
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn stat_rows(stats: &RedeemCodeStats) -> Vec<StatRow> {
    let mut rows = vec![
        StatRow {
            metric: "total".into(),
            value: stats.total_codes.to_string(),
        },
        StatRow {
            metric: "active".into(),
            value: stats.active_codes.to_string(),
        },
        StatRow {
            metric: "used".into(),
            value: stats.used_codes.to_string(),
        },
        StatRow {
            metric: "expired".into(),
            value: stats.expired_codes.to_string(),
        },
        StatRow {
            metric: "value distributed".into(),
            value: stats.total_value_distributed.to_string(),
        },
    ];

    let mut by_type: Vec<_> = stats.by_type.iter().collect();
    by_type.sort_by_key(|(t, _)| t.as_str());
    for (code_type, count) in by_type {
        rows.push(StatRow {
            metric: format!("type: {}", code_type.as_str()),
            value: count.to_string(),
        });
    }

    rows
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &AdminClient,
    args: RedeemArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RedeemCommand::List {
            page,
            page_size,
            code_type,
            status,
            search,
        } => {
            let query = RedeemCodeQuery {
                code_type: code_type.map(Into::into),
                status: status.map(Into::into),
                search,
            };
            let result = client.list_redeem_codes(page, page_size, &query).await?;

            let out = output::render_list(global.output, &result.items, |c| CodeRow::from(c))?;
            output::print_output(&out);
            if global.output == OutputFormat::Table && !global.quiet {
                eprintln!(
                    "{} of {} codes (page {})",
                    result.items.len(),
                    result.total,
                    result.page
                );
            }
            Ok(())
        }

        RedeemCommand::Get { id } => {
            let code = client.get_redeem_code(id).await?;
            let out = output::render_item(global.output, &code, |c| CodeRow::from(c))?;
            output::print_output(&out);
            Ok(())
        }

        RedeemCommand::Generate {
            count,
            code_type,
            value,
            group,
            validity_days,
        } => {
            let mut request = GenerateRedeemCodes::new(count, code_type.into(), value);
            if let Some(g) = group {
                request = request.group(g);
            }
            if let Some(d) = validity_days {
                request = request.validity_days(d);
            }

            let codes = client.generate_redeem_codes(&request).await?;
            let out = output::render_list(global.output, &codes, |c| CodeRow::from(c))?;
            output::print_output(&out);
            if !global.quiet {
                eprintln!("Generated {} codes", codes.len());
            }
            Ok(())
        }

        RedeemCommand::Delete { id } => {
            if !util::confirm(&format!("Delete redeem code {id}?"), global.yes)? {
                return Ok(());
            }
            let confirmation = client.delete_redeem_code(id).await?;
            if !global.quiet {
                eprintln!("{}", confirmation.message);
            }
            Ok(())
        }

        RedeemCommand::BatchDelete { ids } => {
            if !util::confirm(&format!("Delete {} redeem codes?", ids.len()), global.yes)? {
                return Ok(());
            }
            let result = client.batch_delete_redeem_codes(&ids).await?;
            if !global.quiet {
                eprintln!("{} ({} deleted)", result.message, result.deleted);
            }
            Ok(())
        }

        RedeemCommand::Expire { id } => {
            if !util::confirm(&format!("Expire redeem code {id}?"), global.yes)? {
                return Ok(());
            }
            let code = client.expire_redeem_code(id).await?;
            let out = output::render_item(global.output, &code, |c| CodeRow::from(c))?;
            output::print_output(&out);
            Ok(())
        }

        RedeemCommand::Stats => {
            let stats = client.redeem_code_stats().await?;
            let out = match global.output {
                OutputFormat::Table => {
                    use tabled::settings::Style;
                    tabled::Table::new(stat_rows(&stats))
                        .with(Style::sharp())
                        .to_string()
                }
                OutputFormat::Json => serde_json::to_string_pretty(&stats)?,
            };
            output::print_output(&out);
            Ok(())
        }

        RedeemCommand::Export {
            code_type,
            status,
            file,
        } => {
            let query = ExportQuery {
                code_type: code_type.map(Into::into),
                status: status.map(Into::into),
            };
            let bytes = client.export_redeem_codes(&query).await?;

            match file {
                Some(path) => {
                    std::fs::write(&path, &bytes)?;
                    if !global.quiet {
                        eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
                    }
                }
                None => {
                    std::io::stdout().write_all(&bytes)?;
                }
            }
            Ok(())
        }
    }
}
