use super::ConversionAnalysis;

const MIN_TEMPLATE_SAMPLE: u32 = 10;
const MIN_SLOT_SAMPLE: u32 = 5;
const LOW_CONVERSION_RATE: f64 = 0.1;

pub(super) fn generate(analysis: &ConversionAnalysis) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(top) = analysis
        .by_template
        .first()
        .filter(|row| row.total >= MIN_TEMPLATE_SAMPLE)
    {
        recommendations.push(format!(
            "Template \"{}\" converts best at {:.1}% over {} approaches; use it as the default",
            top.template_name,
            top.conversion_rate * 100.0,
            top.total
        ));
    }

    if let Some(top) = analysis
        .by_time_slot
        .first()
        .filter(|row| row.total >= MIN_SLOT_SAMPLE)
    {
        recommendations.push(format!(
            "Approaches sent around {}:00 convert best ({:.1}%)",
            top.hour,
            top.conversion_rate * 100.0
        ));
    }

    if let Some(top) = analysis
        .by_day_of_week
        .first()
        .filter(|row| row.total >= MIN_SLOT_SAMPLE)
    {
        recommendations.push(format!(
            "{} is the strongest day to send ({:.1}%)",
            top.day_label,
            top.conversion_rate * 100.0
        ));
    }

    // An empty batch means no data, not poor performance.
    if analysis.total_approaches > 0 && analysis.overall_conversion_rate < LOW_CONVERSION_RATE {
        recommendations.push(format!(
            "Overall conversion is {:.1}%; revisit template copy and candidate targeting",
            analysis.overall_conversion_rate * 100.0
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::super::{ConversionAnalysis, DayOfWeekConversion, TemplateConversion, TimeSlotConversion};
    use super::generate;

    fn analysis(total: u32, rate: f64) -> ConversionAnalysis {
        ConversionAnalysis {
            total_approaches: total,
            overall_conversion_rate: rate,
            by_template: Vec::new(),
            by_time_slot: Vec::new(),
            by_day_of_week: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn empty_batch_yields_no_warning() {
        assert!(generate(&analysis(0, 0.0)).is_empty());
    }

    #[test]
    fn low_conversion_warning_requires_data() {
        let messages = generate(&analysis(12, 0.05));
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("5.0%"));
    }

    #[test]
    fn sample_size_thresholds_gate_messages() {
        let mut input = analysis(20, 0.4);
        input.by_template.push(TemplateConversion {
            template_id: "t-1".to_string(),
            template_name: "Intro".to_string(),
            total: 9,
            accepted: 4,
            conversion_rate: 4.0 / 9.0,
        });
        input.by_time_slot.push(TimeSlotConversion {
            hour: 10,
            total: 5,
            accepted: 2,
            conversion_rate: 0.4,
        });
        input.by_day_of_week.push(DayOfWeekConversion {
            day_of_week: 3,
            day_label: "Wednesday",
            total: 4,
            accepted: 2,
            conversion_rate: 0.5,
        });

        let messages = generate(&input);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("10:00"));
    }
}
