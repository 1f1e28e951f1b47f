#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub symbols: bool,
    pub digits: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub output: Option<String>,
}
