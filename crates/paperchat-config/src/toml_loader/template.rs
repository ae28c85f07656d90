//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# paperchat configuration
# Only override what you want to change -- missing fields use defaults.
# API keys are read from the environment (ANTHROPIC_API_KEY, OPENAI_API_KEY).

[chat]
# model = "claude-3-5-haiku-latest"
# max_tokens = 2000
# temperature = 0.0      # 0.0-1.0
# max_history = 10       # messages kept in the rolling history (2-100)
# streaming = true
# timeout_secs = 120     # 1-600
# sample_url = "https://ar5iv.labs.arxiv.org/html/2305.10403"

[summarize]
# provider = "openai"    # openai, claude
# model = "gpt-3.5-turbo" # must be a claude-* model when provider = "claude"
# base_url = "https://api.openai.com/v1/chat/completions"
# chunk_size = 10000     # characters (1000-200000)
# overlap = 100          # must be below chunk_size
# max_chunks = 5         # chunks summarized per pass (1-20)
# max_depth = 8          # recursion passes before a forced reduce (1-32)
# timeout_secs = 120     # 1-600
# output_dir = "."
# default_url = "https://ar5iv.labs.arxiv.org/html/2302.04761"

[retry]
# max_attempts = 6       # 1-20
# min_delay_secs = 1
# max_delay_secs = 60

[fetch]
# user_agent = "Mozilla/5.0"
# timeout_secs = 10      # 1-300

[pricing]
# prompt_per_million = 1.63
# completion_per_million = 5.51

[logging]
# level = "warn"         # any tracing EnvFilter directive
"##
    .to_string()
}
