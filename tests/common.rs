#![allow(dead_code)]
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{
    Rng,
    SeedableRng,
};
use seqfeatures::prelude::*;

pub fn init_logger() { let _ = pretty_env_logger::try_init(); }

/// Generates qualifiers over a small pool of names and values so that
/// duplicates of both are frequent.
pub struct QualifierGenerator {
    rng:    StdRng,
    names:  Vec<&'static str>,
    values: Vec<&'static str>,
}

impl QualifierGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng:    StdRng::seed_from_u64(seed),
            names:  vec!["gene", "note", "product", "db_xref", "locus_tag"],
            values: vec!["TP53", "GO:0005515", "GO:0006412", "PDB:1TUP", "kinase"],
        }
    }

    pub fn next_qualifier(&mut self) -> Qualifier {
        let name = self.names.choose(&mut self.rng).unwrap();
        let value = self.values.choose(&mut self.rng).unwrap();
        Qualifier::new(name, *value).unwrap()
    }

    pub fn take(
        &mut self,
        n: usize,
    ) -> Vec<Qualifier> {
        (0..n).map(|_| self.next_qualifier()).collect()
    }

    pub fn name(&mut self) -> &'static str { self.names[self.rng.gen_range(0..self.names.len())] }
}
