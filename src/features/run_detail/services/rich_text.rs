/// Block-level structure of model output, enough to render fenced code,
/// bullet lists and headings without pulling in a full markdown renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextBlock {
    Heading(String),
    Paragraph(String),
    List(Vec<String>),
    Code { language: Option<String>, code: String },
}

pub fn parse_blocks(text: &str) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<String> = Vec::new();
    let mut code: Option<(Option<String>, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some((language, lines)) = code.as_mut() {
            if line.trim_start().starts_with("```") {
                blocks.push(TextBlock::Code { language: language.take(), code: lines.join("\n") });
                code = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        let trimmed = line.trim();
        if let Some(fence) = trimmed.strip_prefix("```") {
            flush(&mut blocks, &mut paragraph, &mut list);
            let language = Some(fence.trim().to_string()).filter(|l| !l.is_empty());
            code = Some((language, Vec::new()));
        } else if trimmed.is_empty() {
            flush(&mut blocks, &mut paragraph, &mut list);
        } else if let Some(heading) = heading_text(trimmed) {
            flush(&mut blocks, &mut paragraph, &mut list);
            blocks.push(TextBlock::Heading(heading.to_string()));
        } else if let Some(item) = list_item(trimmed) {
            flush_paragraph(&mut blocks, &mut paragraph);
            list.push(item.to_string());
        } else if !list.is_empty() && line.starts_with(char::is_whitespace) {
            // indented continuation of the previous bullet
            if let Some(last) = list.last_mut() {
                last.push(' ');
                last.push_str(trimmed);
            }
        } else {
            flush_list(&mut blocks, &mut list);
            paragraph.push(line.trim_end());
        }
    }

    // an unterminated fence still shows its content
    if let Some((language, lines)) = code {
        blocks.push(TextBlock::Code { language, code: lines.join("\n") });
    }
    flush(&mut blocks, &mut paragraph, &mut list);
    blocks
}

fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    line[hashes..].strip_prefix(' ').map(str::trim).filter(|h| !h.is_empty())
}

fn list_item(line: &str) -> Option<&str> {
    if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some(item.trim());
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        return line[digits..].strip_prefix(". ").map(str::trim);
    }
    None
}

fn flush(blocks: &mut Vec<TextBlock>, paragraph: &mut Vec<&str>, list: &mut Vec<String>) {
    flush_paragraph(blocks, paragraph);
    flush_list(blocks, list);
}

fn flush_paragraph(blocks: &mut Vec<TextBlock>, paragraph: &mut Vec<&str>) {
    if !paragraph.is_empty() {
        blocks.push(TextBlock::Paragraph(paragraph.join("\n")));
        paragraph.clear();
    }
}

fn flush_list(blocks: &mut Vec<TextBlock>, list: &mut Vec<String>) {
    if !list.is_empty() {
        blocks.push(TextBlock::List(std::mem::take(list)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_paragraphs_on_blank_lines() {
        let blocks = parse_blocks("CPU is high on reviews-v1.\nMemory is fine.\n\nNext: check logs.");
        assert_eq!(
            blocks,
            vec![
                TextBlock::Paragraph("CPU is high on reviews-v1.\nMemory is fine.".into()),
                TextBlock::Paragraph("Next: check logs.".into()),
            ]
        );
    }

    #[test]
    fn keeps_fenced_code_verbatim() {
        let text = "Run this:\n```bash\nkubectl rollout restart deploy/reviews-v1\n  --namespace bookinfo\n```\nDone.";
        let blocks = parse_blocks(text);
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[1],
            TextBlock::Code {
                language: Some("bash".into()),
                code: "kubectl rollout restart deploy/reviews-v1\n  --namespace bookinfo".into(),
            }
        );
    }

    #[test]
    fn collects_bullets_and_numbered_items() {
        let text = "## Findings\n- pod restarted 5 times\n  in the last hour\n* OOMKilled\n1. raise memory limit";
        let blocks = parse_blocks(text);
        assert_eq!(blocks[0], TextBlock::Heading("Findings".into()));
        assert_eq!(
            blocks[1],
            TextBlock::List(vec![
                "pod restarted 5 times in the last hour".into(),
                "OOMKilled".into(),
                "raise memory limit".into(),
            ])
        );
    }

    #[test]
    fn unterminated_fence_is_still_code() {
        let blocks = parse_blocks("```\nsum(rate(http_requests_total[5m]))");
        assert_eq!(
            blocks,
            vec![TextBlock::Code { language: None, code: "sum(rate(http_requests_total[5m]))".into() }]
        );
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        assert_eq!(parse_blocks("#hashtag"), vec![TextBlock::Paragraph("#hashtag".into())]);
        assert!(parse_blocks("").is_empty());
    }
}
