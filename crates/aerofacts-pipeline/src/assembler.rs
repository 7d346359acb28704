//! Per-ad orchestration and output-table assembly

use aerofacts_domain::traits::FactExtractor;
use aerofacts_domain::{Ad, EngineMetrics, LifecyclePolicy};
use aerofacts_rules::compute_metrics;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Summary of one assembly run
#[derive(Debug, Clone, Default)]
pub struct AssemblyReport {
    /// Number of ads processed
    pub ads_processed: usize,

    /// Ads for which extraction yielded no engine entries
    pub ads_without_facts: usize,

    /// Total engine records produced
    pub records_produced: usize,
}

/// Assembles the output table, one ad at a time.
///
/// For each ad the extractor is invoked exactly once; each returned engine
/// entry is enriched with regex fallbacks (absent fields only - a present
/// structured value, including zero, is authoritative), resolved against
/// the lifecycle policy, and appended as one record. A missing engine is
/// never synthesized. Ad order is preserved; within an ad LEFT precedes
/// RIGHT.
pub struct Assembler<E: FactExtractor> {
    extractor: E,
    policy: LifecyclePolicy,
    today: NaiveDate,
}

impl<E: FactExtractor> Assembler<E> {
    /// Create an assembler computing against today's date
    pub fn new(extractor: E, policy: LifecyclePolicy) -> Self {
        Self {
            extractor,
            policy,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Pin the reference date used for due-date projection
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Process every ad and collect all records, in order
    pub fn run(&self, ads: &[Ad]) -> (Vec<EngineMetrics>, AssemblyReport) {
        let mut records = Vec::new();
        let mut report = AssemblyReport::default();

        for ad in ads {
            let ad_records = self.process_ad(ad);
            report.ads_processed += 1;
            if ad_records.is_empty() {
                report.ads_without_facts += 1;
            }
            report.records_produced += ad_records.len();
            records.extend(ad_records);
        }

        info!(
            ads = report.ads_processed,
            records = report.records_produced,
            without_facts = report.ads_without_facts,
            "assembly complete"
        );

        (records, report)
    }

    /// Produce the records for a single ad
    pub fn process_ad(&self, ad: &Ad) -> Vec<EngineMetrics> {
        let mut entries = self.extractor.extract(&ad.description, &ad.id);
        entries.sort_by_key(|(position, _)| *position);

        if entries.is_empty() {
            debug!(ad_id = %ad.id, "no engine entries extracted");
            return Vec::new();
        }

        // The airframe total is one figure per ad: take the first engine
        // that carries one (LEFT first), fall back to a text scan, and
        // copy the result to every record.
        let shared_airframe_hours = entries
            .iter()
            .find_map(|(_, facts)| facts.total_airframe_hours)
            .or_else(|| aerofacts_patterns::total_airframe_hours(&ad.description));

        let explicit_hours = aerofacts_patterns::explicit_hours_remaining(&ad.description);

        entries
            .into_iter()
            .map(|(position, mut facts)| {
                facts.total_airframe_hours = shared_airframe_hours;
                if facts.date_of_last_hsi.is_none() {
                    facts.date_of_last_hsi = aerofacts_patterns::hsi_date(&ad.description);
                }

                // A stated program field is scanned against the known
                // vocabulary; only when the field is absent does the scan
                // widen to the whole ad body.
                let program_name = match facts.maintenance_program.as_deref() {
                    Some(stated) => aerofacts_patterns::maintenance_program(stated),
                    None => aerofacts_patterns::maintenance_program(&ad.description),
                };

                compute_metrics(
                    &ad.id,
                    position,
                    facts,
                    program_name,
                    explicit_hours,
                    &self.policy,
                    self.today,
                )
            })
            .collect()
    }
}
