// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        Yaml(::serde_yaml::Error);
    }

    errors {
        InputMissing(path: String) {
            description("input file is missing")
            display("input file is missing: '{}'", path)
        }
        InputMalformed(reason: String) {
            description("malformed input")
            display("malformed input: {}", reason)
        }
    }
}
