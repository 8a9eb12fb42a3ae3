use hepviz_common::types::Sample;
use indexmap::IndexMap;

use crate::error::LabelError;

/// Sample identifier to legend metadata, in curated insertion order.
pub type SampleTable = IndexMap<String, Sample>;

/// Looks up a sample by identifier, failing with [`LabelError::UnknownSample`]
/// when the catalog has no such entry.
pub fn lookup<'a>(samples: &'a SampleTable, name: &str) -> Result<&'a Sample, LabelError> {
    samples
        .get(name)
        .ok_or_else(|| LabelError::UnknownSample(name.to_string()))
}

/// Builds the fixed catalog of legend metadata for physics samples.
///
/// Pure and idempotent: every call returns a fresh, content-equal table.
pub fn sample_labels() -> SampleTable {
    let mut samples = SampleTable::new();

    // Standard Model
    let ttbar = r"t$\bar{\text{t}}$";
    samples.insert("ttbar".into(), Sample::new(ttbar, "white"));
    samples.insert("dijet".into(), Sample::new("Dijets", "purple"));
    samples.insert("multijet".into(), Sample::new("Multi-jet", "purple"));
    samples.insert("diboson".into(), Sample::new("Diboson", "green"));
    samples.insert("singletop".into(), Sample::new("Single Top", "blue"));
    samples.insert("ttbarW".into(), Sample::new(format!("{ttbar}W"), "#C9FFE5"));
    samples.insert("ttbarZ".into(), Sample::new(format!("{ttbar}Z"), "#7FFFD4"));
    samples.insert("ttbarV".into(), Sample::new(format!("{ttbar}V"), "cyan"));
    samples.insert("ttbarH".into(), Sample::new(format!("{ttbar}H"), "#3AB09E"));
    samples.insert("ttbarX".into(), Sample::new(format!("{ttbar}V"), "#008B8B"));
    samples.insert("wjets".into(), Sample::new("W+jets", "yellow"));
    samples.insert("zjets".into(), Sample::new("Z+jets", "darkorange"));

    // ttbar split by hadronic decay containment
    samples.insert(
        "ttbar_QONLY".into(),
        Sample::new(format!("{ttbar} (q)"), "#696969"),
    );
    samples.insert(
        "ttbar_BONLY".into(),
        Sample::new(format!("{ttbar} (b)"), "#808080"),
    );
    samples.insert(
        "ttbar_BQ".into(),
        Sample::new(format!("{ttbar} (qb)"), "#79160F"),
    );
    samples.insert(
        "ttbar_W".into(),
        Sample::new(format!("{ttbar} (qq)"), "#DC682A"),
    );
    samples.insert(
        "ttbar_FULL".into(),
        Sample::new(format!("{ttbar} (qqb)"), "red"),
    );
    samples.insert(
        "ttbar_OTHER".into(),
        Sample::new(format!("{ttbar} (other)"), "#EC706B"),
    );
    samples.insert(
        "ttbar_NONE".into(),
        Sample::new(format!("{ttbar} (other)"), "#696969"),
    );

    // Machine learning (CWoLa)
    samples.insert("top".into(), Sample::new("Top", "white"));
    samples.insert("antitop".into(), Sample::new("Anti-top", "white"));

    // Machine learning (AK8+AK4)
    samples.insert("QB".into(), Sample::new(format!("{ttbar} (QB)"), "white"));
    samples.insert("W".into(), Sample::new(format!("{ttbar} (W)"), "white"));

    // Data
    samples.insert("data".into(), Sample::new("Data", "black"));

    // Signal
    samples.insert("signal".into(), Sample::new("Signal", "Reds"));
    samples.insert(
        "zprime_1000".into(),
        Sample::new(r"m$_{\text{Z}^\prime}$=1.0 TeV", "r"),
    );

    // Generic channels
    samples.insert("mu".into(), Sample::new(r"$\mu$+jets", "k"));
    samples.insert("mujets".into(), Sample::new(r"$\mu$+jets", "k"));
    samples.insert("el".into(), Sample::new("e+jets", "k"));
    samples.insert("ejets".into(), Sample::new("e+jets", "k"));
    samples.insert("muel".into(), Sample::new(r"$\ell$+jets", "k"));
    samples.insert("ljets".into(), Sample::new(r"$\ell$+jets", "k"));

    samples
}
