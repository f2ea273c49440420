#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use kira_pathscore::geneid::ReferenceTable;

pub const HGNC_TSV: &str = "\
HGNC ID\tApproved symbol\tApproved name\tStatus\tPrevious symbols\tAlias symbols\tNCBI Gene ID\tEnsembl gene ID\tRefSeq IDs
HGNC:5\tA1BG\talpha-1-B glycoprotein\tApproved\t\t\t1\tENSG00000121410\tNM_130786
HGNC:11998\tTP53\ttumor protein p53\tApproved\t\tp53, LFS1\t7157\tENSG00000141510\tNM_000546
HGNC:1100\tBRCA1\tBRCA1 DNA repair associated\tApproved\tRNF53\tBRCAI, BRCC1, PPP1R53\t672\tENSG00000012048\tNM_007294
HGNC:90001\tDUP1\tduplicate withdrawn\tEntry Withdrawn\t\t\t90001\tENSG00000900001\t
HGNC:90002\tDUP1\tduplicate approved\tApproved\t\t\t90002\tENSG00000900002\tNM_900002
HGNC:90003\tGENEP\tprevious holder\tApproved\tXSYM, OLD1\t\t90003\tENSG00000900003\tNM_900003
HGNC:90004\tGENEA\talias holder\tApproved\tOLD1\tXSYM\t90004\tENSG00000900004\tNM_900004
HGNC:90005\tGENEX\tshared refseq one\tApproved\t\t\t90005\tENSG00000900005\tNM_SHARED
HGNC:90006\tGENEY\tshared refseq two\tApproved\t\t\t90006\tENSG00000900006\tNM_SHARED
HGNC:90007\tNOENS\tno ensembl\tApproved\t\t\t90007\t\tNM_900007
HGNC:90008\tLATEALIAS\tlater alias\tApproved\t\tp53\t90008\tENSG00000900008\tNM_900008
";

/// Sample cohort: TP53 and A1BG for three samples.
pub const SAMPLE_CSV: &str = "\
,S1,S2,S3
ENSG00000141510,10,5,7
ENSG00000121410,4,6,8
";

/// Control cohort: TP53 mean 5 / std 1, A1BG mean 4 / std 2.
pub const CONTROL_GCT: &str = "\
#1.2
2\t3
id\tName\tDescription\tC1\tC2\tC3
0\tENSG00000141510.17\tTP53\t4\t5\t6
1\tENSG00000121410.11\tA1BG\t2\t4\t6
";

pub const GENESETS_TSV: &str = "\
immune\tmixed\tghost
TP53\tA1BG\tNOTAGENE
p53\tTP53\t
\tBRCA1\t
";

pub fn reference() -> ReferenceTable {
    ReferenceTable::from_reader(HGNC_TSV.as_bytes(), "fixture").unwrap()
}

pub struct Inputs {
    pub reference: PathBuf,
    pub sample: PathBuf,
    pub control: PathBuf,
    pub genesets: PathBuf,
}

pub fn write_inputs(dir: &Path) -> Inputs {
    let inputs = Inputs {
        reference: dir.join("hgnc.tsv"),
        sample: dir.join("counts.csv"),
        control: dir.join("control.gct"),
        genesets: dir.join("genesets.tsv"),
    };
    fs::write(&inputs.reference, HGNC_TSV).unwrap();
    fs::write(&inputs.sample, SAMPLE_CSV).unwrap();
    fs::write(&inputs.control, CONTROL_GCT).unwrap();
    fs::write(&inputs.genesets, GENESETS_TSV).unwrap();
    inputs
}
