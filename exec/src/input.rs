use std::path::{ Path, PathBuf };
use std::fs::File;
use std::io::BufReader;
use serde_json;

use errors::*;

#[derive(Deserialize, Debug, Clone)]
pub struct ModelOutput {
    pub name: String,
    /// holds one directory per document, with one file per repeat: `{document}/{repeat}.txt`
    pub output_dir: String
}

fn default_n_repeats() -> usize {
    5
}

/// Description of a batch: every model is evaluated on every document of `document_dir`
#[derive(Deserialize, Debug)]
pub struct BatchInput {
    pub reference_dir: String,
    pub document_dir: String,
    pub models: Vec<ModelOutput>,
    #[serde(default = "default_n_repeats")]
    pub n_repeats: usize,
    pub output_file: String
}

impl BatchInput {
    pub fn from_file(finput: &Path) -> Result<BatchInput> {
        let file = File::open(finput)
            .chain_err(|| format!("cannot open batch input {}", finput.display()))?;
        let input: BatchInput = serde_json::from_reader(BufReader::new(file))
            .chain_err(|| format!("invalid batch input {}", finput.display()))?;

        if input.n_repeats == 0 {
            bail!("n_repeats must be at least 1");
        }
        Ok(input)
    }

    /// Names of the documents (stems of the `.txt` files of `document_dir`), sorted
    pub fn list_documents(&self) -> Result<Vec<String>> {
        let dir = Path::new(&self.document_dir);
        let mut documents = Vec::new();

        for entry in dir.read_dir().chain_err(|| format!("cannot list documents of {}", dir.display()))? {
            let fpath = entry?.path();
            if fpath.extension().map_or(false, |ext| ext == "txt") {
                let fname = fpath.file_name().map(|x| x.to_string_lossy().into_owned()).unwrap_or_default();
                if fname.contains("documents-metadata") {
                    continue;
                }

                if let Some(stem) = fpath.file_stem() {
                    documents.push(stem.to_string_lossy().into_owned());
                }
            }
        }

        documents.sort();
        Ok(documents)
    }

    pub fn reference_file(&self, document: &str) -> PathBuf {
        Path::new(&self.reference_dir).join(format!("{}.json", document))
    }

    pub fn prediction_file(&self, model: &ModelOutput, document: &str, repeat: usize) -> PathBuf {
        Path::new(&model.output_dir).join(document).join(format!("{}.txt", repeat))
    }
}
