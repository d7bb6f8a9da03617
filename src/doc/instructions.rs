/*!
# Instructions

| Char | Instruction |
|------|-------------|
| `+`  | Add one to the current cell. 255 becomes 0. |
| `-`  | Take one from the current cell. 0 becomes 255. |
| `>`  | Move to the next cell. The tape grows a zero cell when needed. |
| `<`  | Move to the previous cell. Moving left of the first cell is an error. |
| `.`  | Print the current cell as a character. |
| `,`  | Read a character into the current cell. An empty line reads as 0. |
| `[`  | If the current cell is 0, jump past the matching `]`. |
| `]`  | If the current cell is not 0, jump back to the matching `[`. |
| `^`  | Breakpoint. Show the machine and what has been printed, then wait for ENTER. |

Any other character is a comment.

## Output
Everything printed with `.` is collected and shown once the program
ends. Cells print as the character with the same code point, so 10
is a newline and 233 is `é`.

## Input
`,` asks for a line and keeps only its first character. Characters
above 255 are stored modulo 256.

## Loops
Brackets are matched while the program runs, not before. When `[`
finds a zero cell it scans ahead counting `[` and `]` until they
balance. When `]` finds a nonzero cell it returns to the `[` that
opened the loop, which checks the cell again.

## Errors
Every error ends the program. Nothing printed before the error is
shown.

```text
ADDRESS UNDERFLOW AT 0      '<' on the first cell
STACK UNDERFLOW AT 4        ']' with no open '['
UNBALANCED LOOP AT 2        '[' skipped on a zero cell and no ']' matched it
INTERRUPTED AT 17           CTRL-C
```

The number is the position of the instruction in the program,
counting from 0.

A `[` that is entered but never closed is not an error. The program
simply ends when it runs out of instructions.

*/
