fn main() -> anyhow::Result<()> {
    sdef2swift::cli::run()
}
