use chrono::{DateTime, Utc};
use clap::Args;
use outreach_engine::config::AppConfig;
use outreach_engine::error::AppError;
use outreach_engine::workflows::history::{ApproachHistoryImporter, TemplateCatalogImporter};
use outreach_engine::workflows::outreach::calendar::weekday_label;
use outreach_engine::workflows::outreach::{
    ApproachEvent, ConversionAnalysis, EmailTemplate, FreelanceLimit, OptimalSendTime,
    OutreachAdvisor, TargetType, TemplateEffectiveness,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Approach history CSV export
    #[arg(long)]
    pub(crate) history: PathBuf,
    /// Template catalog CSV (id,name)
    #[arg(long)]
    pub(crate) templates: PathBuf,
    /// Evaluation instant for cooldown windows (defaults to now)
    #[arg(long, value_parser = crate::infra::parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CoolingDownFreelancer {
    pub(crate) freelancer_id: String,
    #[serde(flatten)]
    pub(crate) limit: FreelanceLimit,
}

#[derive(Debug, Serialize)]
pub(crate) struct OutreachReport {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) conversion: ConversionAnalysis,
    pub(crate) send_time: OptimalSendTime,
    pub(crate) effectiveness: Vec<TemplateEffectiveness>,
    pub(crate) cooling_down: Vec<CoolingDownFreelancer>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        history,
        templates,
        now,
        json,
    } = args;

    let config = AppConfig::load()?;
    let approaches = ApproachHistoryImporter::from_path(&history)?;
    let templates = TemplateCatalogImporter::from_path(&templates)?;
    let advisor = OutreachAdvisor::new(config.policy);

    let report = build_report(
        &advisor,
        &approaches,
        &templates,
        now.unwrap_or_else(Utc::now),
    );

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
    } else {
        render_report(&report, advisor.policy().freelance_limit_days);
    }

    Ok(())
}

pub(crate) fn build_report(
    advisor: &OutreachAdvisor,
    approaches: &[ApproachEvent],
    templates: &[EmailTemplate],
    now: DateTime<Utc>,
) -> OutreachReport {
    let freelancers: BTreeSet<&str> = approaches
        .iter()
        .filter(|approach| approach.target_type == TargetType::Freelancer)
        .map(|approach| approach.target_id.as_str())
        .collect();

    let cooling_down = freelancers
        .into_iter()
        .map(|freelancer_id| CoolingDownFreelancer {
            freelancer_id: freelancer_id.to_string(),
            limit: advisor.check_freelance_limit(freelancer_id, approaches, None, now),
        })
        .filter(|entry| !entry.limit.can_approach)
        .collect();

    OutreachReport {
        generated_at: now,
        conversion: advisor.conversion(approaches, templates),
        send_time: advisor.optimal_send_time_from_history(approaches),
        effectiveness: advisor.template_effectiveness(approaches, templates),
        cooling_down,
    }
}

fn percent(rate: f64) -> f64 {
    rate * 100.0
}

fn render_report(report: &OutreachReport, freelance_limit_days: u32) {
    let conversion = &report.conversion;
    println!(
        "Outreach report as of {}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "- {} approaches | {:.1}% overall conversion",
        conversion.total_approaches,
        percent(conversion.overall_conversion_rate)
    );

    if !conversion.by_template.is_empty() {
        println!("\nConversion by template:");
        for row in &conversion.by_template {
            println!(
                "  - {}: {}/{} accepted ({:.1}%)",
                row.template_name,
                row.accepted,
                row.total,
                percent(row.conversion_rate)
            );
        }
    }

    if let Some(best) = conversion.by_time_slot.first() {
        println!(
            "Best send hour: {}:00 ({:.1}% over {} approaches)",
            best.hour,
            percent(best.conversion_rate),
            best.total
        );
    }
    if let Some(best) = conversion.by_day_of_week.first() {
        println!(
            "Best weekday: {} ({:.1}% over {} approaches)",
            best.day_label,
            percent(best.conversion_rate),
            best.total
        );
    }

    let send_time = &report.send_time;
    println!(
        "\nSuggested send slot: {} {}:00 (open {:.1}% | reply {:.1}%)",
        weekday_label(send_time.day_of_week),
        send_time.hour,
        percent(send_time.open_rate),
        percent(send_time.reply_rate)
    );
    println!("  {}", send_time.recommendation);

    if !report.effectiveness.is_empty() {
        println!("\nTemplate effectiveness:");
        for entry in &report.effectiveness {
            println!(
                "  - {}: {:.1} avg over {} approaches",
                entry.template_name, entry.average_score, entry.sample_size
            );
        }
    }

    if report.cooling_down.is_empty() {
        println!("\nNo freelancers inside the {freelance_limit_days}-day limit");
    } else {
        println!("\nFreelancers inside the {freelance_limit_days}-day limit:");
        for entry in &report.cooling_down {
            println!("  - {}: {}", entry.freelancer_id, entry.limit.message);
        }
    }

    if !conversion.recommendations.is_empty() {
        println!("\nRecommendations:");
        for message in &conversion.recommendations {
            println!("  - {message}");
        }
    }
}
