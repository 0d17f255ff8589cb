use crate::error::{CustomError, Result};

/// Genotype call at a single marker. The discriminant is the categorical code used by
/// the simulator; 0 is reserved for a missing call.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genotype {
    Missing = 0,
    HomRef = 1,
    Het = 2,
    HomAlt = 3,
}

impl Genotype {
    pub const ALL: [Genotype; 4] = [
        Genotype::Missing,
        Genotype::HomRef,
        Genotype::Het,
        Genotype::HomAlt,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Two-allele pedigree representation of the call.
    pub fn encode(self) -> &'static str {
        match self {
            Genotype::Missing => "0 0",
            Genotype::HomRef => "1 1",
            Genotype::Het => "1 2",
            Genotype::HomAlt => "2 2",
        }
    }

    pub fn decode(pair: &str) -> Result<Self> {
        let mut alleles = pair.split_whitespace();
        let genotype = match (alleles.next(), alleles.next(), alleles.next()) {
            (Some("0"), Some("0"), None) => Genotype::Missing,
            (Some("1"), Some("1"), None) => Genotype::HomRef,
            (Some("1"), Some("2"), None) | (Some("2"), Some("1"), None) => Genotype::Het,
            (Some("2"), Some("2"), None) => Genotype::HomAlt,
            _ => {
                return Err(CustomError::AlleleCode {
                    pair: pair.to_string(),
                });
            }
        };
        Ok(genotype)
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male = 1,
    Female = 2,
}

impl Sex {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// 1-based index within the panel
    pub index: usize,
}

impl Marker {
    pub const CHROMOSOME: &'static str = "0";

    pub fn name(&self) -> String {
        format!("rs{}", self.index)
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

/// The six leading pedigree fields of a simulated individual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMeta {
    pub fid: String,
    pub iid: String,
    pub father: String,
    pub mother: String,
    pub phenotype: String,
    pub sex: Sex,
}

impl SampleMeta {
    pub fn simulated(idx: usize, sex: Sex) -> Self {
        let id = format!("ind{idx}");
        Self {
            fid: id.clone(),
            iid: id,
            father: "0".to_string(),
            mother: "0".to_string(),
            phenotype: "-9".to_string(),
            sex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub meta: SampleMeta,
    pub genotypes: Vec<Genotype>,
}

/// Individuals sharing one marker set. Every individual carries exactly
/// `n_markers` genotypes.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    n_markers: usize,
    individuals: Vec<Individual>,
}

impl Panel {
    pub fn new(n_markers: usize) -> Self {
        Self {
            n_markers,
            individuals: Vec::new(),
        }
    }

    pub fn push(&mut self, individual: Individual) -> Result<()> {
        if individual.genotypes.len() != self.n_markers {
            return Err(CustomError::PanelMarkerCount {
                iid: individual.meta.iid,
                n_markers: individual.genotypes.len(),
                expected: self.n_markers,
            });
        }
        self.individuals.push(individual);
        Ok(())
    }

    pub fn n_markers(&self) -> usize {
        self.n_markers
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> {
        (1..=self.n_markers).map(|index| Marker { index })
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoder_maps_codes_to_allele_pairs() {
        assert_eq!(Genotype::ALL[0].encode(), "0 0");
        assert_eq!(Genotype::ALL[1].encode(), "1 1");
        assert_eq!(Genotype::ALL[2].encode(), "1 2");
        assert_eq!(Genotype::ALL[3].encode(), "2 2");
    }

    #[test]
    fn decode_inverts_encode() {
        for genotype in Genotype::ALL {
            assert_eq!(Genotype::decode(genotype.encode()).unwrap(), genotype);
        }
    }

    #[test]
    fn decode_rejects_unknown_pairs() {
        assert!(Genotype::decode("A G").is_err());
        assert!(Genotype::decode("1").is_err());
        assert!(Genotype::decode("1 1 1").is_err());
    }

    #[test]
    fn simulated_meta_uses_index_ids() {
        let meta = SampleMeta::simulated(7, Sex::Female);
        assert_eq!(meta.fid, "ind7");
        assert_eq!(meta.iid, "ind7");
        assert_eq!(meta.father, "0");
        assert_eq!(meta.mother, "0");
        assert_eq!(meta.phenotype, "-9");
        assert_eq!(meta.sex.code(), 2);
    }

    #[test]
    fn panel_rejects_individual_with_wrong_marker_count() {
        let mut panel = Panel::new(2);
        let ok = Individual {
            meta: SampleMeta::simulated(0, Sex::Male),
            genotypes: vec![Genotype::HomRef; 2],
        };
        panel.push(ok).unwrap();
        let short = Individual {
            meta: SampleMeta::simulated(1, Sex::Male),
            genotypes: vec![Genotype::HomRef; 1],
        };
        match panel.push(short).unwrap_err() {
            CustomError::PanelMarkerCount {
                iid,
                n_markers,
                expected,
            } => {
                assert_eq!(iid, "ind1");
                assert_eq!((n_markers, expected), (1, 2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(panel.len(), 1);
    }

    #[test]
    fn panel_markers_are_one_based() {
        let panel = Panel::new(3);
        let markers: Vec<_> = panel.markers().collect();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].name(), "rs1");
        assert_eq!(markers[2].position(), 3);
    }
}
