fn main() -> anyhow::Result<()> {
    turtle_dojo::run()
}
