//! Prompt template for documentation fixes.

use crate::warnings::Warning;

/// Build the resolution prompt for one file.
///
/// The template introduces the header and its contents, lists the doxygen
/// warnings, optionally includes the companion implementation file, and
/// instructs the model to fix only the documentation and answer with the
/// whole file as a single code block.
pub fn build_resolution_prompt(
    file_name: &str,
    file_contents: &str,
    warnings: &[Warning],
    companion_contents: Option<&str>,
) -> String {
    let warning_list = warnings
        .iter()
        .map(Warning::formatted)
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!(
        r#"There are issues with the documentation in a C++ file ({file_name}):

```cpp
{file_contents}
```

The following warnings are generated by doxygen. They are in the format 'line: warning':

```
{warning_list}
```
"#
    );

    if let Some(implementation) = companion_contents {
        prompt.push_str(&format!(
            r#"
Here is the corresponding implementation file for reference:

```cpp
{implementation}
```
"#
        ));
    }

    let hint = if companion_contents.is_some() {
        " When adding missing documentation, consult the implementation file to enhance quality and usefulness."
    } else {
        ""
    };
    prompt.push_str(&format!(
        "\nPlease fix the issues. Don't touch the code itself.{hint} \
         Print the whole file ({file_name}) including those fixes as a code block \
         without any extra text or explanations.\n"
    ));

    prompt
}
