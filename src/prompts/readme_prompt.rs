pub const README_PROMPT_INSTRUCTIONS: &str = r#"Generate a comprehensive README.md that includes:
1. A clear project title with appropriate badges (build status, license, language)
2. A concise but informative description
3. Key features (infer from the code structure and dependencies)
4. Tech stack section with icons/badges
5. Prerequisites and installation instructions
6. Usage examples with code snippets
7. A live demo section when a deployment URL is provided, otherwise a placeholder for a demo link
8. Contributing guidelines (brief)
9. License information

Use proper markdown formatting. Make it visually appealing with appropriate headers, code blocks, and badges.
Keep it professional and developer-friendly.
Do NOT include any explanatory text before or after the README - output ONLY the README content."#;
