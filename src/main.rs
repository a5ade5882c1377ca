fn main() -> anyhow::Result<()> {
    formprobe::cli::run()
}
