use crate::infra::{InMemorySessionRepository, SnapshotBackend};
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use trampos::config::AppConfig;
use trampos::error::AppError;
use trampos::quiz::sampler::pair_counts;
use trampos::quiz::{
    Answer, MatchStrategy, QuizResults, QuizService, QuizStore, RankedCareer, ResultShape,
    RiasecType, SessionSampler, ShapedResults, SnapshotKey, SnapshotStore,
};
use trampos::telemetry;

/// Answers given in session order, e.g. `ynnyyn...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerScript(pub(crate) Vec<Answer>);

pub(crate) fn parse_answers(raw: &str) -> Result<AnswerScript, String> {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_string().parse::<Answer>())
        .collect::<Result<Vec<_>, _>>()
        .map(AnswerScript)
}

fn parse_strategy(raw: &str) -> Result<MatchStrategy, String> {
    raw.parse().map_err(|err: trampos::quiz::matching::UnknownStrategy| err.to_string())
}

fn parse_shape(raw: &str) -> Result<ResultShape, String> {
    raw.parse().map_err(|err: trampos::quiz::matching::UnknownShape| err.to_string())
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for question sampling and random answers. Defaults to TRAMPOS_SEED, then entropy.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Scripted answers in session order (y/s = yes, n = no). Missing answers stay blank.
    #[arg(long, value_parser = parse_answers)]
    pub(crate) answers: Option<AnswerScript>,
    /// Matching strategy: top_subtypes, own_type_coverage or related_coverage.
    #[arg(long, value_parser = parse_strategy)]
    pub(crate) strategy: Option<MatchStrategy>,
    /// Result shape: flat, per_tier or paged.
    #[arg(long, value_parser = parse_shape)]
    pub(crate) shape: Option<ResultShape>,
    /// Print the results payload as JSON instead of a summary.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogCheckArgs {
    /// Directory holding admin snapshots (defaults to TRAMPOS_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        answers,
        strategy,
        shape,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let mut settings = config.quiz.settings;
    if seed.is_some() {
        settings.seed = seed;
    }
    if let Some(strategy) = strategy {
        settings.matching.strategy = strategy;
    }
    if let Some(shape) = shape {
        settings.matching.shape = shape;
    }

    let service = QuizService::new(
        Arc::new(InMemorySessionRepository::with_capacity(1)),
        Arc::new(SnapshotBackend::from_data_dir(config.quiz.data_dir)),
        settings,
    )?;

    let record = service.start_session()?;

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !json {
        println!("Trampos quiz demo ({})", record.id);
        println!(
            "Strategy: {} | shape: {}",
            settings.matching.strategy, settings.matching.shape
        );
    }

    for (index, question) in record.questions.iter().enumerate() {
        let answer = match &answers {
            Some(AnswerScript(script)) => match script.get(index) {
                Some(answer) => *answer,
                None => continue,
            },
            None => {
                if rng.gen_bool(0.5) {
                    Answer::Yes
                } else {
                    Answer::No
                }
            }
        };

        service.answer(&record.id, question.id, answer)?;
        if !json {
            let (credited, subtype) = question.awarded(answer);
            println!(
                "  {:>2}. [{}/{}] {} -> {} ({} {})",
                index + 1,
                question.yes_type,
                question.no_type,
                question.text,
                answer_label(answer),
                credited,
                subtype
            );
        }
    }

    let results = service.results(&record.id)?;

    if json {
        let payload = serde_json::to_string_pretty(&results).map_err(std::io::Error::from)?;
        println!("{}", payload);
        return Ok(());
    }

    render_results(&results);
    Ok(())
}

fn answer_label(answer: Answer) -> &'static str {
    match answer {
        Answer::Yes => "Sim",
        Answer::No => "Não",
    }
}

fn render_results(results: &QuizResults) {
    println!(
        "\nAnswered {}/{}{}",
        results.answered,
        results.total,
        if results.complete { "" } else { " (partial)" }
    );

    let dominant = results
        .types
        .iter()
        .find(|card| card.riasec_type == results.dominant);
    match dominant {
        Some(card) => println!("Dominant profile: {} ({})", card.name, card.riasec_type),
        None => println!("Dominant profile: {}", results.dominant),
    }

    println!("Type scores:");
    for card in &results.types {
        println!(
            "  - {} {:<14} {:>2}/{:<2} {:>3}% {}",
            card.riasec_type,
            card.name,
            card.score,
            card.capacity,
            card.percentage,
            "#".repeat((card.percentage / 5) as usize)
        );
    }

    if results.top_subtypes.is_empty() {
        println!("Top subtypes: none yet");
    } else {
        println!("Top subtypes: {}", results.top_subtypes.join(", "));
    }

    println!("Careers ({}):", results.strategy);
    match &results.careers {
        ShapedResults::Flat { careers } => {
            for career in careers {
                print_career(career);
            }
        }
        ShapedResults::PerTier { tiers } => {
            for bucket in tiers {
                println!(
                    "  {} ({}) showing {} of {}",
                    bucket.tier,
                    bucket.fraction,
                    bucket.careers.len(),
                    bucket.total
                );
                for career in &bucket.careers {
                    print_career(career);
                }
            }
        }
        ShapedResults::Paged { tiers } => {
            for page in tiers {
                println!(
                    "  {} showing {} of {}",
                    page.tier,
                    page.careers.len(),
                    page.total
                );
                for career in &page.careers {
                    print_career(career);
                }
                if let Some(next) = page.next_offset {
                    println!("    ... more from offset {}", next);
                }
            }
        }
    }

    if suggests_retake(&results.careers) {
        println!("No career reached a strong match. Consider retaking the quiz.");
    }
}

fn print_career(entry: &RankedCareer) {
    println!(
        "    - {} [{}] {}/4 matches, subtype sum {}{}",
        entry.career.name,
        entry.career.riasec_type,
        entry.match_count,
        entry.subtype_sum,
        if entry.matches_dominant { " *" } else { "" }
    );
}

fn suggests_retake(careers: &ShapedResults) -> bool {
    let mut tiers = Vec::new();
    match careers {
        ShapedResults::Flat { careers } => tiers.extend(careers.iter().map(|entry| entry.tier)),
        ShapedResults::PerTier { tiers: buckets } => tiers.extend(
            buckets
                .iter()
                .flat_map(|bucket| bucket.careers.iter().map(|entry| entry.tier)),
        ),
        ShapedResults::Paged { tiers: pages } => tiers.extend(
            pages
                .iter()
                .flat_map(|page| page.careers.iter().map(|entry| entry.tier)),
        ),
    }
    tiers.iter().all(|tier| tier.suggests_retake())
}

#[derive(Debug, Serialize)]
struct SnapshotStatus {
    key: &'static str,
    status: String,
}

#[derive(Debug, Serialize)]
struct CatalogReport {
    snapshots: String,
    sources: Vec<SnapshotStatus>,
    subtypes: usize,
    questions: usize,
    pairs: BTreeMap<String, usize>,
    careers: usize,
    careers_by_type: BTreeMap<RiasecType, usize>,
    min_own_type_subtypes: usize,
}

pub(crate) fn run_catalog_check(args: CatalogCheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let backend = SnapshotBackend::from_data_dir(args.data_dir.or(config.quiz.data_dir));
    let sources = SnapshotKey::ordered()
        .into_iter()
        .map(|key| SnapshotStatus {
            key: key.as_str(),
            status: match backend.load(key) {
                Ok(Some(_)) => "stored".to_string(),
                Ok(None) => "defaults".to_string(),
                Err(err) => format!("unreadable ({err})"),
            },
        })
        .collect();

    let policy = config.quiz.settings.catalog;
    let store = QuizStore::load(&backend, policy)?;
    SessionSampler::new(store.profiles(), store.questions())?;

    let mut careers_by_type = BTreeMap::new();
    for career in store.careers() {
        *careers_by_type.entry(career.riasec_type).or_insert(0) += 1;
    }

    let report = CatalogReport {
        snapshots: backend.describe(),
        sources,
        subtypes: store.profiles().universe().count(),
        questions: store.questions().len(),
        pairs: pair_counts(store.questions())
            .into_iter()
            .map(|(pair, count)| (pair.label().to_string(), count))
            .collect(),
        careers: store.careers().len(),
        careers_by_type,
        min_own_type_subtypes: policy.min_own_type_subtypes,
    };

    if args.json {
        let payload = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{}", payload);
        return Ok(());
    }

    println!("Catalog check ({})", report.snapshots);
    for source in &report.sources {
        println!("- {}: {}", source.key, source.status);
    }
    println!("Profiles: 6 types, {} subtypes", report.subtypes);
    println!("Question bank: {} questions", report.questions);
    for (pair, count) in &report.pairs {
        println!("  - {}: {}", pair, count);
    }
    println!(
        "Careers: {} (at least {} own-type subtypes each)",
        report.careers, report.min_own_type_subtypes
    );
    for (riasec_type, count) in &report.careers_by_type {
        println!("  - {}: {}", riasec_type, count);
    }
    println!("Status: ready to sample sessions");
    Ok(())
}
