/// Builds a [`Compound`](crate::Compound) from `key => value` pairs.
///
/// Keys are anything convertible to `String`; values are anything with a
/// `From` conversion into [`Tag`](crate::Tag). Entries keep their written order.
///
/// ```rust
/// use serde_snbt::{compound, Tag};
///
/// let item = compound! {
///     "id" => "minecraft:stone",
///     "Count" => 64i8,
///     "Lore" => vec![Tag::from("heavy")],
/// };
/// assert_eq!(item.get("Count"), Some(&Tag::Byte(64)));
/// ```
#[macro_export]
macro_rules! compound {
    () => {
        $crate::Compound::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut compound = $crate::Compound::new();
        $(
            compound.insert(::std::string::String::from($key), $crate::Tag::from($value));
        )+
        compound
    }};
}
