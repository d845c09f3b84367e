use super::{Parameters, Statement};
use crate::error::CryptoError;
use crate::field::GqElement;
use crate::utils::hash::HashOracle;
use crate::zkp::arguments::hadamard_argument::{self, HadamardArgument};
use crate::zkp::arguments::single_value_product_argument::{self, SingleValueProductArgument};
use crate::zkp::ArgumentOfKnowledge;

/// `m = 1` needs only a Single Value Product Argument; `m > 1` first
/// collapses the matrix to its Hadamard product via a Hadamard Argument,
/// then proves that vector's entries multiply to the claimed value.
#[derive(Clone)]
pub enum Proof {
    Short(single_value_product_argument::Proof),
    Long {
        c_b: GqElement,
        hadamard_proof: hadamard_argument::Proof,
        svp_proof: single_value_product_argument::Proof,
    },
}

impl Proof {
    pub fn verify<H: HashOracle>(parameters: &Parameters, statement: &Statement, proof: &Proof, oracle: &H) -> Result<(), CryptoError> {
        let m = parameters.m;
        let n = parameters.n;
        let ck = &parameters.commit_key;

        match proof {
            Proof::Short(svp_proof) => {
                if m != 1 {
                    return Err(CryptoError::InvalidProductArgumentStatement);
                }
                let svp_parameters = single_value_product_argument::Parameters::new(n, ck.clone());
                let svp_statement = single_value_product_argument::Statement::new(statement.c_a[0].clone(), statement.b.clone())?;
                SingleValueProductArgument::verify(&svp_parameters, &svp_statement, svp_proof, oracle)
            }
            Proof::Long { c_b, hadamard_proof, svp_proof } => {
                if m == 1 {
                    return Err(CryptoError::InvalidProductArgumentStatement);
                }
                let hadamard_parameters = hadamard_argument::Parameters::new(m, n, ck.clone());
                let hadamard_statement = hadamard_argument::Statement::new(statement.c_a.clone(), c_b.clone())?;
                HadamardArgument::verify(&hadamard_parameters, &hadamard_statement, hadamard_proof, oracle)?;

                let svp_parameters = single_value_product_argument::Parameters::new(n, ck.clone());
                let svp_statement = single_value_product_argument::Statement::new(c_b.clone(), statement.b.clone())?;
                SingleValueProductArgument::verify(&svp_parameters, &svp_statement, svp_proof, oracle)
            }
        }
    }
}
