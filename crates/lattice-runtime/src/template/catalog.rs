//! The built-in template catalog.
//!
//! Twenty pipelines across the domains the product demos lean on: data
//! platform, ML, delivery, commerce and operations. Ids `wf-4`..`wf-23` are
//! stable; the listing endpoint and saved frontend links rely on them.

use super::PipelineTemplate;

/// Returns the full template catalog, in listing order.
pub fn catalog() -> &'static [PipelineTemplate] {
    &CATALOG
}

/// Looks up a template by workflow id.
pub fn find(id: &str) -> Option<&'static PipelineTemplate> {
    CATALOG.iter().find(|template| template.id == id)
}

static CATALOG: [PipelineTemplate; 20] = [
    PipelineTemplate {
        id: "wf-4",
        name: "Data Ingestion & Landing",
        description: "collect, land, partition, manifest",
        nodes: &[
            ("SRC", "API ingest"),
            ("SQOOP", "Sqoop import"),
            ("RAW", "Raw zone (HDFS)"),
            ("PART", "Partition compaction"),
            ("MANIFEST", "Manifest build"),
            ("QC", "Quality checks"),
            ("DW", "Detail layer load"),
            ("ACK", "Acknowledgement"),
            ("ERR", "Failure alert"),
        ],
        layers: &[
            &["SRC", "SQOOP"],
            &["RAW", "PART"],
            &["MANIFEST", "QC"],
            &["DW", "ACK", "ERR"],
        ],
        conditions: &[("QC", "ERR", "fail"), ("QC", "DW", "pass")],
    },
    PipelineTemplate {
        id: "wf-5",
        name: "Offline ETL Rollup",
        description: "ODS -> DWD -> DWS -> ADS",
        nodes: &[
            ("ODS", "ODS load"),
            ("DWD", "Detail refinement"),
            ("DIM", "Dimension build"),
            ("DWS", "Aggregate layer"),
            ("ADS", "Application layer"),
            ("CHK", "Validation"),
            ("REP", "Report export"),
        ],
        layers: &[&["ODS"], &["DWD", "DIM"], &["DWS"], &["ADS", "CHK"], &["REP"]],
        conditions: &[("CHK", "REP", "ok")],
    },
    PipelineTemplate {
        id: "wf-6",
        name: "Model Training Pipeline (Binary)",
        description: "features -> training -> evaluation -> registry",
        nodes: &[
            ("ING", "Sample preparation"),
            ("FE", "Feature engineering"),
            ("SPLIT", "Train/validation split"),
            ("TRAIN", "Training (GBDT)"),
            ("EVAL", "Evaluation"),
            ("REG", "Model registry"),
            ("EXPL", "Explainability"),
            ("PUSH", "Push to serving"),
        ],
        layers: &[
            &["ING"],
            &["FE"],
            &["SPLIT"],
            &["TRAIN"],
            &["EVAL", "EXPL"],
            &["REG"],
            &["PUSH"],
        ],
        conditions: &[("EVAL", "REG", ">=0.8")],
    },
    PipelineTemplate {
        id: "wf-7",
        name: "CI/CD Build & Release",
        description: "build -> test -> release",
        nodes: &[
            ("SCM", "Checkout"),
            ("BUILD", "Image build"),
            ("UT", "Unit tests"),
            ("IT", "Integration tests"),
            ("SEC", "Security scan"),
            ("STG", "Canary stage"),
            ("PRD", "Production rollout"),
            ("ROLL", "Rollback"),
        ],
        layers: &[
            &["SCM"],
            &["BUILD"],
            &["UT", "IT", "SEC"],
            &["STG"],
            &["PRD", "ROLL"],
        ],
        conditions: &[("STG", "PRD", "ok"), ("STG", "ROLL", "fail")],
    },
    PipelineTemplate {
        id: "wf-8",
        name: "Streaming Ingest & Aggregation",
        description: "Kafka -> Flink -> OLAP",
        nodes: &[
            ("ING", "Kafka ingest"),
            ("FLK", "Flink cleansing"),
            ("AGG", "Realtime aggregation"),
            ("OLAP", "OLAP sink"),
            ("ALM", "Alerting"),
            ("DLQ", "Dead letter queue"),
        ],
        layers: &[&["ING"], &["FLK"], &["AGG"], &["OLAP", "ALM", "DLQ"]],
        conditions: &[("FLK", "DLQ", "invalid")],
    },
    PipelineTemplate {
        id: "wf-9",
        name: "Log Analytics Chain",
        description: "collect -> parse -> index -> visualize",
        nodes: &[
            ("COL", "Filebeat"),
            ("PAR", "Parsing"),
            ("IDX", "Indexing (ES)"),
            ("DASH", "Dashboards"),
            ("ALM", "Alerting"),
        ],
        layers: &[&["COL"], &["PAR"], &["IDX"], &["DASH", "ALM"]],
        conditions: &[],
    },
    PipelineTemplate {
        id: "wf-10",
        name: "Recommendation Recall Pool",
        description: "behavior -> embedding -> ANN",
        nodes: &[
            ("UV", "Behavior archive"),
            ("FE", "Embedding training"),
            ("ANN", "Nearest-neighbor index"),
            ("EXP", "Exploration experiment"),
            ("OUT", "Recall pool export"),
        ],
        layers: &[&["UV"], &["FE"], &["ANN", "EXP"], &["OUT"]],
        conditions: &[],
    },
    PipelineTemplate {
        id: "wf-11",
        name: "Risk Features & Rules",
        description: "risk feature and rule production",
        nodes: &[
            ("RAW", "Transaction snapshot"),
            ("FE", "Feature extraction"),
            ("SEL", "Feature selection"),
            ("RULE", "Rule compilation"),
            ("PUB", "Rule publication"),
            ("MON", "Monitoring"),
        ],
        layers: &[&["RAW"], &["FE"], &["SEL", "RULE"], &["PUB", "MON"]],
        conditions: &[],
    },
    PipelineTemplate {
        id: "wf-12",
        name: "IoT Telemetry Processing",
        description: "time-series landing and alerting",
        nodes: &[
            ("GW", "Gateway intake"),
            ("DEC", "Decoding"),
            ("TS", "Time-series write"),
            ("QC", "Quality detection"),
            ("ALM", "Threshold alert"),
            ("REP", "Daily report"),
        ],
        layers: &[&["GW"], &["DEC"], &["TS", "QC"], &["ALM", "REP"]],
        conditions: &[("QC", "ALM", "fail")],
    },
    PipelineTemplate {
        id: "wf-13",
        name: "Order Fulfillment",
        description: "order -> pick -> deliver",
        nodes: &[
            ("CRT", "Order placed"),
            ("PAY", "Payment"),
            ("INV", "Inventory hold"),
            ("PCK", "Picking"),
            ("SHP", "Shipment"),
            ("RCV", "Delivery confirmed"),
            ("RET", "Return"),
        ],
        layers: &[
            &["CRT", "PAY"],
            &["INV"],
            &["PCK"],
            &["SHP"],
            &["RCV", "RET"],
        ],
        conditions: &[("PAY", "INV", "paid")],
    },
    PipelineTemplate {
        id: "wf-14",
        name: "Payment Clearing & Settlement",
        description: "clearing and reconciliation flow",
        nodes: &[
            ("COL", "Acquiring"),
            ("CHK", "Reconciliation"),
            ("CLR", "Clearing"),
            ("SET", "Settlement"),
            ("ALM", "Exception"),
        ],
        layers: &[&["COL"], &["CHK"], &["CLR"], &["SET", "ALM"]],
        conditions: &[("CHK", "ALM", "mismatch")],
    },
    PipelineTemplate {
        id: "wf-15",
        name: "Supply Chain Replenishment",
        description: "forecast -> replenish -> receive",
        nodes: &[
            ("FCST", "Sales forecast"),
            ("PLAN", "Replenishment plan"),
            ("PO", "Purchase order"),
            ("ASN", "Arrival notice"),
            ("IN", "Receiving"),
            ("ALM", "Stockout alert"),
        ],
        layers: &[&["FCST"], &["PLAN"], &["PO"], &["ASN"], &["IN", "ALM"]],
        conditions: &[],
    },
    PipelineTemplate {
        id: "wf-16",
        name: "A/B Experiment Evaluation",
        description: "experiment split and evaluation",
        nodes: &[
            ("SPL", "Traffic split"),
            ("COL", "Metric collection"),
            ("EVA", "Statistical test"),
            ("DEC", "Decision"),
            ("ROL", "Rollback"),
            ("ROLF", "Follow-up"),
        ],
        layers: &[&["SPL"], &["COL"], &["EVA"], &["DEC"], &["ROL", "ROLF"]],
        conditions: &[("DEC", "ROL", "bad"), ("DEC", "ROLF", "good")],
    },
    PipelineTemplate {
        id: "wf-17",
        name: "Feature Store Build",
        description: "unified batch/stream features",
        nodes: &[
            ("RAW", "Event archive"),
            ("DIM", "Dimension fill"),
            ("AGG", "Window aggregation"),
            ("JOIN", "Multi-source join"),
            ("VAL", "Validation"),
            ("PUB", "Publication"),
        ],
        layers: &[&["RAW"], &["DIM"], &["AGG", "JOIN"], &["VAL"], &["PUB"]],
        conditions: &[],
    },
    PipelineTemplate {
        id: "wf-18",
        name: "Model Rollout & Canary",
        description: "package, canary, go live",
        nodes: &[
            ("PKG", "Model packaging"),
            ("IMG", "Image build"),
            ("DEP", "Deployment"),
            ("AB", "Canary"),
            ("MON", "Monitoring"),
            ("ALR", "Alerting"),
        ],
        layers: &[&["PKG"], &["IMG"], &["DEP"], &["AB"], &["MON", "ALR"]],
        conditions: &[("AB", "MON", "ok"), ("AB", "ALR", "fail")],
    },
    PipelineTemplate {
        id: "wf-19",
        name: "Monitoring & Alerting",
        description: "scrape, rules, notify",
        nodes: &[
            ("SCR", "Scraping"),
            ("TS", "Aggregation"),
            ("RUL", "Rules"),
            ("NTF", "Notification"),
            ("TKT", "Ticketing"),
        ],
        layers: &[&["SCR"], &["TS"], &["RUL"], &["NTF", "TKT"]],
        conditions: &[],
    },
    PipelineTemplate {
        id: "wf-20",
        name: "Data Quality Checks",
        description: "completeness, uniqueness, ranges",
        nodes: &[
            ("IMP", "Import"),
            ("SCM", "Schema check"),
            ("UNI", "Uniqueness"),
            ("RNG", "Range check"),
            ("REP", "Report"),
            ("BLK", "Block"),
        ],
        layers: &[&["IMP"], &["SCM"], &["UNI", "RNG"], &["REP", "BLK"]],
        conditions: &[("SCM", "BLK", "invalid")],
    },
    PipelineTemplate {
        id: "wf-21",
        name: "Customer Onboarding",
        description: "review, sign, open account",
        nodes: &[
            ("APPLY", "Application submitted"),
            ("KYC", "Identity review"),
            ("RISK", "Risk assessment"),
            ("SIGN", "Contract signing"),
            ("OPEN", "Account opening"),
            ("REJ", "Rejection"),
        ],
        layers: &[&["APPLY"], &["KYC", "RISK"], &["SIGN", "REJ"], &["OPEN"]],
        conditions: &[("KYC", "REJ", "fail"), ("RISK", "REJ", "high")],
    },
    PipelineTemplate {
        id: "wf-22",
        name: "Billing Run",
        description: "reconcile, rate, invoice",
        nodes: &[
            ("COL", "Usage collection"),
            ("RAT", "Rating"),
            ("INV", "Invoicing"),
            ("NOT", "Notification"),
            ("DIS", "Dispute"),
        ],
        layers: &[&["COL"], &["RAT"], &["INV"], &["NOT", "DIS"]],
        conditions: &[],
    },
    PipelineTemplate {
        id: "wf-23",
        name: "Churn Prediction",
        description: "train -> evaluate -> production",
        nodes: &[
            ("ETL", "Data preparation"),
            ("FE", "Features"),
            ("TR", "Training"),
            ("EV", "Evaluation"),
            ("REG", "Registry"),
            ("EXP", "Experiment platform"),
        ],
        layers: &[&["ETL"], &["FE"], &["TR"], &["EV"], &["REG", "EXP"]],
        conditions: &[("EV", "REG", ">=0.75")],
    },
];
