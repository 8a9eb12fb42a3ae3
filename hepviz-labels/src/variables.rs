use std::sync::Arc;

use hepviz_common::types::Variable;
use indexmap::IndexMap;

use crate::bins::uniform_edges;
use crate::error::LabelError;

/// Variable identifier to axis metadata, in curated insertion order.
///
/// Values are shared: an alias key holds a clone of the `Arc` stored under
/// its long-form key, so both keys refer to one record.
pub type VariableTable = IndexMap<String, Arc<Variable>>;

/// Looks up a variable by identifier, failing with
/// [`LabelError::UnknownVariable`] when the catalog has no such entry.
pub fn lookup<'a>(variables: &'a VariableTable, name: &str) -> Result<&'a Arc<Variable>, LabelError> {
    variables
        .get(name)
        .ok_or_else(|| LabelError::UnknownVariable(name.to_string()))
}

fn var(nbins: usize, low: f64, high: f64, label: impl Into<String>) -> Arc<Variable> {
    Arc::new(Variable::new(label, uniform_edges(nbins, low, high)))
}

/// Binds `key` to the record already stored under `target`. Both keys end
/// up holding the same `Arc`, not content-equal copies.
fn alias(variables: &mut VariableTable, key: &str, target: &str) {
    let record = variables[target].clone();
    variables.insert(key.to_string(), record);
}

/// Builds the fixed catalog of axis metadata for plotted quantities.
///
/// Pure and idempotent: every call returns a fresh, content-equal table.
pub fn variable_labels() -> VariableTable {
    let phi = r"$\phi$";
    let eta = r"$\eta$";
    let pt = r"$_\text{T}$ [GeV]";
    let mass = "Mass [GeV]";

    let mut variables = VariableTable::new();

    // Large-R (AK8) jet substructure
    variables.insert(
        "ljet_C2".into(),
        var(10, 0.0, 0.6, r"Large-R Jet C$_2^{\beta\text{=1}}$"),
    );
    variables.insert(
        "ljet_D2".into(),
        var(20, 0.0, 5.0, r"Large-R Jet D$_2^{\beta\text{=1}}$"),
    );
    variables.insert(
        "ljet_d12".into(),
        var(20, 0.0, 125.0, r"Large-R Jet $\sqrt{\text{d}_{\text{12}}}$ [GeV]"),
    );
    variables.insert(
        "ljet_d23".into(),
        var(12, 0.0, 60.0, r"Large-R Jet $\sqrt{\text{d}_{\text{23}}}$ [GeV]"),
    );
    variables.insert("ljet_eta".into(), var(20, -3.0, 3.0, format!("Large-R Jet {eta}")));
    variables.insert("ljet_phi".into(), var(20, -2.0, 2.0, r"Large-R Jet $\phi$"));
    variables.insert("ljet_m".into(), var(40, 0.0, 400.0, format!("Large-R Jet {mass}")));
    variables.insert("ljet_pt".into(), var(14, 200.0, 1500.0, format!("Large-R Jet p{pt}")));
    variables.insert(
        "ljet_tau1".into(),
        var(10, 0.0, 1.0, r"Large-R Jet $\tau_{\text{1}}$"),
    );
    variables.insert(
        "ljet_tau2".into(),
        var(10, 0.0, 1.0, r"Large-R Jet $\tau_{\text{2}}$"),
    );
    variables.insert(
        "ljet_tau3".into(),
        var(10, 0.0, 1.0, r"Large-R Jet $\tau_{\text{3}}$"),
    );
    variables.insert(
        "ljet_tau21".into(),
        var(11, 0.0, 1.1, r"Large-R Jet $\tau_{\text{21}}$"),
    );
    variables.insert(
        "ljet_tau32".into(),
        var(11, 0.0, 1.1, r"Large-R Jet $\tau_{\text{32}}$"),
    );
    variables.insert("ljet_charge".into(), var(80, -5.0, 5.0, "Large-R Jet Charge"));
    variables.insert(
        "ljet_SDmass".into(),
        var(40, 0.0, 400.0, "Large-R Jet Softdrop Mass [GeV]"),
    );
    alias(&mut variables, "ljet_softDropMass", "ljet_SDmass");

    // Boosted-event-shape tagger scores
    variables.insert("ljet_BEST_t".into(), var(10, 0.0, 1.0, "Large-R Jet BEST(top)"));
    variables.insert("ljet_BEST_w".into(), var(10, 0.0, 1.0, "Large-R Jet BEST(W)"));
    variables.insert("ljet_BEST_z".into(), var(10, 0.0, 1.0, "Large-R Jet BEST(Z)"));
    variables.insert("ljet_BEST_h".into(), var(10, 0.0, 1.0, "Large-R Jet BEST(H)"));
    variables.insert("ljet_BEST_j".into(), var(10, 0.0, 1.0, "Large-R Jet BEST(jet)"));
    variables.insert(
        "ljet_BEST_t_j".into(),
        var(10, 0.0, 1.0, "Large-R Jet BEST(top/(top+jet))"),
    );

    // DeepAK8 score vector, one entry per output node
    for i in 0..16 {
        variables.insert(
            format!("ljet_deepAK8_{i}"),
            var(10, 0.0, 1.0, format!("Large-R Jet DeepAK8[{i}]")),
        );
    }

    // Subjets, split by lepton charge
    variables.insert(
        "ljet_subjet_0_charge_Qpos".into(),
        var(50, -5.0, 5.0, "Large-R Jet Subjet 0 charge"),
    );
    variables.insert(
        "ljet_subjet_0_bdisc_Qpos".into(),
        var(10, 0.0, 1.0, "Large-R Jet Subjet 0 b-disc."),
    );
    variables.insert(
        "ljet_subjet_1_charge_Qpos".into(),
        var(50, -5.0, 5.0, "Large-R Jet Subjet 1 charge"),
    );
    variables.insert(
        "ljet_subjet_1_bdisc_Qpos".into(),
        var(10, 0.0, 1.0, "Large-R Jet Subjet 1 b-disc."),
    );
    variables.insert(
        "ljet_subjet_0_charge_Qneg".into(),
        var(50, -5.0, 5.0, "Large-R Jet Subjet 0 charge"),
    );
    variables.insert(
        "ljet_subjet_0_bdisc_Qneg".into(),
        var(10, 0.0, 1.0, "Large-R Jet Subjet 0 b-disc."),
    );
    variables.insert(
        "ljet_subjet_1_charge_Qneg".into(),
        var(50, -5.0, 5.0, "Large-R Jet Subjet 1 charge"),
    );
    variables.insert(
        "ljet_subjet_1_bdisc_Qneg".into(),
        var(10, 0.0, 1.0, "Large-R Jet Subjet 1 b-disc."),
    );

    // Subjets, charge-inclusive
    variables.insert(
        "ljet_subjet0_charge".into(),
        var(50, -5.0, 5.0, "Large-R Jet Subjet 0 charge"),
    );
    variables.insert(
        "ljet_subjet0_bdisc".into(),
        var(10, 0.0, 1.0, "Large-R Jet Subjet 0 b-disc."),
    );
    variables.insert(
        "ljet_subjet0_mass".into(),
        var(20, 0.0, 200.0, format!("Large-R Jet Subjet 0 {mass}")),
    );
    variables.insert(
        "ljet_subjet0_mrel".into(),
        var(10, 0.0, 1.0, format!("Large-R Jet Subjet 0 Relative {mass}")),
    );
    variables.insert(
        "ljet_subjet0_ptrel".into(),
        var(10, 0.0, 1.0, format!("Large-R Jet Subjet 0 Relative p{pt}")),
    );
    variables.insert(
        "ljet_subjet0_tau21".into(),
        var(10, 0.0, 1.0, r"Large-R Jet Subjet 0 $\tau_{\text{21}}$"),
    );
    variables.insert(
        "ljet_subjet0_tau32".into(),
        var(10, 0.0, 1.0, r"Large-R Jet Subjet 0 $\tau_{\text{32}}$"),
    );
    variables.insert(
        "ljet_subjet1_charge".into(),
        var(50, -5.0, 5.0, "Large-R Jet Subjet 1 charge"),
    );
    variables.insert(
        "ljet_subjet1_bdisc".into(),
        var(10, 0.0, 1.0, "Large-R Jet Subjet 1 b-disc."),
    );
    variables.insert(
        "ljet_subjet1_mass".into(),
        var(20, 0.0, 200.0, format!("Large-R Jet Subjet 1 {mass}")),
    );
    variables.insert(
        "ljet_subjet1_mrel".into(),
        var(10, 0.0, 1.0, format!("Large-R Jet Subjet 1 Relative {mass}")),
    );
    variables.insert(
        "ljet_subjet1_ptrel".into(),
        var(10, 0.0, 1.0, format!("Large-R Jet Subjet 1 Relative p{pt}")),
    );
    variables.insert(
        "ljet_subjet1_tau21".into(),
        var(10, 0.0, 1.0, r"Large-R Jet Subjet 1 $\tau_{\text{21}}$"),
    );
    variables.insert(
        "ljet_subjet1_tau32".into(),
        var(10, 0.0, 1.0, r"Large-R Jet Subjet 1 $\tau_{\text{32}}$"),
    );
    variables.insert(
        "ljet_subjets_deltaQ".into(),
        var(100, -10.0, 10.0, r"$\Delta$Q (Large-R Jet Subjets)"),
    );
    variables.insert(
        "ljet_contain".into(),
        var(11, -5.5, 5.5, "Large-R Jet Containment"),
    );

    // Small-R (AK4) jets
    variables.insert("jet_pt".into(), var(10, 25.0, 500.0, format!("Small-R Jet p{pt}")));
    variables.insert("jet_eta".into(), var(10, -2.5, 2.5, format!("Small-R Jet {eta}")));
    variables.insert("jet_bdisc".into(), var(10, 0.0, 1.0, "Small-R Jet b-disc."));

    // Object multiplicities
    variables.insert("btags_n".into(), var(6, -0.5, 5.5, "Number of b-tags"));
    alias(&mut variables, "n_btags", "btags_n");
    variables.insert("n_jets".into(), var(11, -0.5, 10.5, "Number of Small-R Jets"));
    variables.insert("n_ljets".into(), var(6, -0.5, 5.5, "Number of Large-R Jets"));

    // Leptons
    variables.insert("lep_eta".into(), var(10, -2.5, 2.5, format!("Lepton {eta}")));
    variables.insert("lep_pt".into(), var(10, 25.0, 300.0, format!("Lepton p{pt}")));

    variables.insert("mu_pt".into(), var(10, 25.0, 300.0, format!("Muon p{pt}")));
    variables.insert("mu_eta".into(), var(10, -2.5, 2.5, format!("Muon {eta}")));
    variables.insert("mu_phi".into(), var(10, -2.5, 2.5, format!("Muon {phi}")));
    variables.insert(
        "mu_ptrel".into(),
        var(50, 0.0, 500.0, r"Muon p$_\text{T}^\text{rel}$"),
    );
    variables.insert(
        "mu_drmin".into(),
        var(10, 0.0, 5.0, r"Muon $\Delta$R$_\text{min}$"),
    );
    variables.insert("el_pt".into(), var(10, 25.0, 300.0, format!("Electron p{pt}")));
    variables.insert("el_eta".into(), var(10, -2.5, 2.5, format!("Electron {eta}")));
    variables.insert("el_phi".into(), var(10, -2.5, 2.5, format!("Electron {phi}")));
    variables.insert(
        "el_ptrel".into(),
        var(50, 0.0, 500.0, r"Electron p$_\text{T}^\text{rel}$"),
    );
    variables.insert(
        "el_drmin".into(),
        var(10, 0.0, 5.0, r"Electron $\Delta$R$_\text{min}$"),
    );

    // Angular separations and combined objects
    variables.insert("deltaR_lep_ak4".into(), var(10, 0.0, 5.0, r"$\Delta$R(lepton,AK4)"));
    variables.insert(
        "pTrel_lep_ak4".into(),
        var(10, 0.0, 100.0, r"p$_\text{T}^\text{rel}$(lepton,AK4)"),
    );
    variables.insert("deltaR_lep_ak8".into(), var(10, 0.0, 5.0, r"$\Delta$R(lepton,AK8)"));
    variables.insert("deltaR_ak4_ak8".into(), var(10, 0.0, 5.0, r"$\Delta$R(AK4,AK8)"));
    variables.insert(
        "ljet_jet_m".into(),
        var(50, 0.0, 5000.0, format!("Large-R Jet + Small-R Jet {mass}")),
    );
    variables.insert(
        "ljet_jet_deltaR".into(),
        var(10, 0.0, 5.0, r"$\Delta$R(Large-R Jet,Small-R Jet)"),
    );

    // Neutrino
    variables.insert("nu_phi".into(), var(64, -3.2, 3.2, format!(r"$\nu$ {phi}")));
    variables.insert("nu_eta".into(), var(10, -2.5, 2.5, format!(r"$\nu$ {eta}")));
    variables.insert("nu_pt".into(), var(30, 0.0, 600.0, format!(r"$\nu$ p{pt}")));

    // Event-level quantities
    variables.insert("ht".into(), var(50, 0.0, 5000.0, format!("H{pt}")));
    alias(&mut variables, "HT", "ht");
    variables.insert("mtw".into(), var(12, 0.0, 120.0, r"m$_\text{T}^\text{W}$ [GeV]"));
    variables.insert("mlb".into(), var(32, 0.0, 800.0, r"m$_{\ell\text{b}}$"));
    alias(&mut variables, "mass_lb", "mlb");
    variables.insert(
        "met_met".into(),
        var(50, 0.0, 500.0, r"E$_{\text{T}}^{\text{miss}}$ [GeV]"),
    );
    variables.insert(
        "met_phi".into(),
        var(6, -3.2, 3.2, r"$\phi^{\text{miss}}$ [GeV]"),
    );

    // Reconstructed ttbar system
    let tt = r"\text{t}\bar{\text{t}}";
    variables.insert("mtt".into(), var(25, 0.0, 5000.0, format!("m$_{{{tt}}}$ [GeV]")));
    variables.insert(
        "pttt".into(),
        var(10, 0.0, 500.0, format!(r"p$_{{\text{{T}},{tt} }}$ [GeV]")),
    );
    variables.insert("ytt".into(), var(10, 0.0, 5.0, format!("y$_{{{tt}}}$ [GeV]")));
    variables.insert(
        "beta".into(),
        var(10, 0.0, 1.0, format!(r"$\beta_{{z,{tt}}}$ [GeV]")),
    );
    variables.insert("dy".into(), var(12, -3.0, 3.0, r"$\Delta|\text{y}|$"));
    variables.insert(
        "dyres".into(),
        var(12, -3.0, 3.0, r"$\Delta|\text{y}|$ Resolution"),
    );

    alias(&mut variables, "deltay", "dy");
    alias(&mut variables, "mttbar", "mtt");
    alias(&mut variables, "pTttbar", "pttt");
    alias(&mut variables, "yttbar", "ytt");
    alias(&mut variables, "betatt", "beta");
    alias(&mut variables, "betattbar", "beta");

    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bins::hist1d;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_softdrop_mass_alias_shares_one_record() {
        let variables = variable_labels();
        let long_form = &variables["ljet_softDropMass"];
        let short_form = &variables["ljet_SDmass"];
        assert!(Arc::ptr_eq(long_form, short_form));
        assert_eq!(long_form.label, "Large-R Jet Softdrop Mass [GeV]");
    }

    #[test]
    fn test_all_aliases_share_records() {
        let variables = variable_labels();
        let pairs = [
            ("ljet_softDropMass", "ljet_SDmass"),
            ("n_btags", "btags_n"),
            ("HT", "ht"),
            ("mass_lb", "mlb"),
            ("deltay", "dy"),
            ("mttbar", "mtt"),
            ("pTttbar", "pttt"),
            ("yttbar", "ytt"),
            ("betatt", "beta"),
            ("betattbar", "beta"),
        ];
        for (key, target) in pairs {
            assert!(
                Arc::ptr_eq(&variables[key], &variables[target]),
                "{key} should share {target}'s record"
            );
        }
    }

    #[test]
    fn test_deep_ak8_family() {
        let variables = variable_labels();
        let expected_binning = hist1d(10, 0.0, 1.0).unwrap();
        for i in 0..16 {
            let entry = &variables[format!("ljet_deepAK8_{i}").as_str()];
            assert_eq!(entry.binning, expected_binning);
            assert!(entry.label.contains(&format!("[{i}]")));
        }
        // The family is independent records, not aliases
        assert!(!Arc::ptr_eq(
            &variables["ljet_deepAK8_0"],
            &variables["ljet_deepAK8_1"]
        ));
    }

    #[test]
    fn test_curated_binnings() {
        let variables = variable_labels();

        let pt = &variables["ljet_pt"];
        assert_eq!(pt.nbins(), 14);
        assert_approx_eq!(f64, pt.binning[0], 200.0);
        assert_approx_eq!(f64, *pt.binning.last().unwrap(), 1500.0);

        let tau21 = &variables["ljet_tau21"];
        assert_eq!(tau21.nbins(), 11);
        assert_approx_eq!(f64, *tau21.binning.last().unwrap(), 1.1);
    }

    #[test]
    fn test_binnings_strictly_increasing() {
        for (name, variable) in variable_labels() {
            assert!(variable.binning.len() >= 2, "{name} has too few edges");
            for pair in variable.binning.windows(2) {
                assert!(pair[0] < pair[1], "{name} edges not increasing");
            }
        }
    }

    #[test]
    fn test_lookup_unknown_variable() {
        let variables = variable_labels();
        assert!(lookup(&variables, "ljet_SDmass").is_ok());
        assert_eq!(
            lookup(&variables, "nonexistent_var"),
            Err(LabelError::UnknownVariable("nonexistent_var".to_string()))
        );
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(variable_labels(), variable_labels());
    }
}
