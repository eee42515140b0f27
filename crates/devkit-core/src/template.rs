/// Starter Go program emitted by `dev go main`.
pub const GO_MAIN: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello")
}"#;
