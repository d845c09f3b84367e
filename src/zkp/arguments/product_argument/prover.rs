use super::{Parameters, Proof, Statement, Witness};
use crate::containers::GroupVector;
use crate::error::CryptoError;
use crate::utils::hash::HashOracle;
use crate::utils::vector_arithmetic::hadamard_product_prefix;
use crate::vector_commitment::pedersen::PedersenCommitment;
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::arguments::hadamard_argument::{self, HadamardArgument};
use crate::zkp::arguments::single_value_product_argument::{self, SingleValueProductArgument};
use crate::zkp::ArgumentOfKnowledge;

use rand::RngCore;

pub struct Prover<'a> {
    parameters: &'a Parameters,
    statement: &'a Statement,
    witness: &'a Witness,
}

impl<'a> Prover<'a> {
    pub fn new(parameters: &'a Parameters, statement: &'a Statement, witness: &'a Witness) -> Self {
        Self { parameters, statement, witness }
    }

    pub fn prove<R: RngCore, H: HashOracle>(&self, rng: &mut R, oracle: &H) -> Result<Proof, CryptoError> {
        let m = self.parameters.m;
        let n = self.parameters.n;
        let ck = &self.parameters.commit_key;

        if m == 1 {
            let svp_parameters = single_value_product_argument::Parameters::new(n, ck.clone());
            let svp_statement = single_value_product_argument::Statement::new(self.statement.c_a[0].clone(), self.statement.b.clone())?;
            let svp_witness = single_value_product_argument::Witness::new(self.witness.a.column(0).clone(), self.witness.r.get(0).unwrap().clone())?;
            let svp_proof = SingleValueProductArgument::prove(rng, &svp_parameters, &svp_statement, &svp_witness, oracle)?;
            return Ok(Proof::Short(svp_proof));
        }

        let group = self.statement.b.group().clone();
        let b_vec = hadamard_product_prefix(&self.witness.a, m - 1)?;
        let s_b = group.random_scalar(rng);
        let c_b = PedersenCommitment::commit(ck, &b_vec, &s_b)?;

        let hadamard_parameters = hadamard_argument::Parameters::new(m, n, ck.clone());
        let hadamard_statement = hadamard_argument::Statement::new(self.statement.c_a.clone(), c_b.clone())?;
        let hadamard_witness = hadamard_argument::Witness::new(self.witness.a.clone(), self.witness.r.clone(), GroupVector::new(b_vec.clone())?, s_b.clone())?;
        let hadamard_proof = HadamardArgument::prove(rng, &hadamard_parameters, &hadamard_statement, &hadamard_witness, oracle)?;

        let svp_parameters = single_value_product_argument::Parameters::new(n, ck.clone());
        let svp_statement = single_value_product_argument::Statement::new(c_b.clone(), self.statement.b.clone())?;
        let svp_witness = single_value_product_argument::Witness::new(GroupVector::new(b_vec)?, s_b)?;
        let svp_proof = SingleValueProductArgument::prove(rng, &svp_parameters, &svp_statement, &svp_witness, oracle)?;

        Ok(Proof::Long { c_b, hadamard_proof, svp_proof })
    }
}
